use serde::Serialize;

use crate::emit::Channel;
use crate::pipeline::Translation;

/// Per-category counts of what a run wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConversionSummary {
    pub addresses: usize,
    pub address_group_members: usize,
    pub services: usize,
    pub service_group_members: usize,
    pub interfaces: usize,
    pub schedules: usize,
    pub policies: usize,
    pub disabled_policies: usize,
}

pub fn summarize(translation: &Translation) -> ConversionSummary {
    let blocks = |channel| translation.channels.counts(channel).blocks;
    ConversionSummary {
        addresses: blocks(Channel::Addresses),
        address_group_members: blocks(Channel::AddressGroups),
        services: blocks(Channel::Services),
        service_group_members: translation.channels.counts(Channel::Services).annotations,
        interfaces: blocks(Channel::Interfaces),
        schedules: blocks(Channel::Schedules),
        policies: blocks(Channel::Policies),
        disabled_policies: translation.disabled_policies,
    }
}

pub fn render(summary: ConversionSummary) -> String {
    format!(
        "convert_summary addresses={} address_group_members={} services={} service_group_members={} interfaces={} schedules={} policies={} disabled_policies={}",
        summary.addresses,
        summary.address_group_members,
        summary.services,
        summary.service_group_members,
        summary.interfaces,
        summary.schedules,
        summary.policies,
        summary.disabled_policies
    )
}
