use tracing::debug;

use super::EMPTY_COMMENT;
use crate::emit::{Block, Record};
use crate::extract::{AddressEntity, AddressGroupEntity, AddressValue};
use crate::sanitize::sanitize;

/// `config firewall address` entries.
///
/// The network value is passed through as written (`a.b.c.d/len` or
/// `a.b.c.d m.m.m.m`); only entries with neither network nor FQDN are dropped.
pub fn translate_address(address: &AddressEntity) -> Vec<Record> {
    let Some(value) = &address.value else {
        debug!(address = %address.name, "skipping address without network or fqdn");
        return Vec::new();
    };
    let comment = address
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .unwrap_or(EMPTY_COMMENT);

    let block = Block::new(sanitize(&address.name));
    let block = match value {
        AddressValue::Subnet(net) => block.set("subnet", net.as_str()),
        AddressValue::Fqdn(fqdn) => block.set("type", "fqdn").set("fqdn", fqdn.as_str()),
    };
    vec![Record::Block(block.set("comment", comment))]
}

/// `config firewall addrgrp` entries, one `append member` block per member.
pub fn translate_address_group(group: &AddressGroupEntity) -> Vec<Record> {
    if group.members.is_empty() {
        debug!(group = %group.name, "skipping address group without static members");
        return Vec::new();
    }
    let name = sanitize(&group.name);
    group
        .members
        .iter()
        .map(|member| Record::Block(Block::new(name.as_str()).append("member", sanitize(member))))
        .collect()
}
