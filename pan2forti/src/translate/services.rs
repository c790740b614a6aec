use tracing::debug;

use crate::emit::{Block, Record};
use crate::extract::{ServiceEntity, ServiceGroupEntity};
use crate::sanitize::sanitize;

/// `config firewall service custom` entries.
///
/// TCP and UDP ranges land in separate blocks under the same name; FortiOS
/// merges them when the blocks are pasted in order.
pub fn translate_service(service: &ServiceEntity) -> Vec<Record> {
    let name = sanitize(&service.name);
    let records: Vec<Record> = [
        ("tcp-portrange", &service.tcp_ports),
        ("udp-portrange", &service.udp_ports),
    ]
    .into_iter()
    .filter_map(|(key, ports)| {
        let ports = ports.as_deref()?;
        Some(Record::Block(Block::new(name.as_str()).set(key, ports)))
    })
    .collect();

    if records.is_empty() {
        debug!(service = %service.name, "skipping service without tcp or udp ports");
    }
    records
}

/// Service groups are not rebuilt as FortiOS groups; membership is recorded
/// as comments for manual reconciliation.
pub fn translate_service_group(group: &ServiceGroupEntity) -> Vec<Record> {
    let name = sanitize(&group.name);
    group
        .members
        .iter()
        .map(|member| Record::Annotation(format!("service-group {name} member {}", sanitize(member))))
        .collect()
}
