use serde::Serialize;
use xml_tree_core::XmlNode;

use crate::extract;
use crate::pipeline::TranslateError;

/// What the extractors see in an export, before any translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityCounts {
    pub vsys: String,
    pub addresses: usize,
    pub address_groups: usize,
    pub services: usize,
    pub service_groups: usize,
    pub interface_bindings: usize,
    pub schedules: usize,
    pub policies: usize,
    pub disabled_policies: usize,
}

pub fn count_entities(root: &XmlNode) -> Result<EntityCounts, TranslateError> {
    let vsys = extract::vsys(root).ok_or(TranslateError::MissingVsys)?;
    let policies = extract::extract_policies(vsys);
    Ok(EntityCounts {
        vsys: vsys.attr("name").unwrap_or_default().to_string(),
        addresses: extract::extract_addresses(vsys).len(),
        address_groups: extract::extract_address_groups(vsys).len(),
        services: extract::extract_services(vsys).len(),
        service_groups: extract::extract_service_groups(vsys).len(),
        interface_bindings: extract::extract_interfaces(root).len(),
        schedules: extract::extract_schedules(vsys).len(),
        disabled_policies: policies.iter().filter(|p| p.disabled).count(),
        policies: policies.len(),
    })
}

pub fn render(counts: &EntityCounts) -> String {
    format!(
        "vsys={} addresses={} address_groups={} services={} service_groups={} interface_bindings={} schedules={} policies={} disabled_policies={}",
        counts.vsys,
        counts.addresses,
        counts.address_groups,
        counts.services,
        counts.service_groups,
        counts.interface_bindings,
        counts.schedules,
        counts.policies,
        counts.disabled_policies
    )
}
