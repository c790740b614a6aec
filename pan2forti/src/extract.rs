//! Typed views over a PAN-OS export.
//!
//! Every extractor reads one category out of the generic [`XmlNode`] tree and
//! returns entities in document order. Names are returned as found in the
//! export; sanitizing is the translators' job. Missing optional fields are
//! defaulted here so the translators only deal with settled values.

use std::str::FromStr;

use ipnetwork::IpNetwork;
use tracing::debug;
use xml_tree_core::XmlNode;

use crate::sanitize::sanitize;

/// Path from the document root to the first virtual system.
pub const VSYS_PATH: [&str; 4] = ["devices", "entry", "vsys", "entry"];
/// Path from the document root to the physical ethernet entries.
pub const ETHERNET_PATH: [&str; 6] = ["devices", "entry", "network", "interface", "ethernet", "entry"];

const NONAME: &str = "NONAME";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressValue {
    /// `ip-netmask` text, kept verbatim.
    Subnet(String),
    Fqdn(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressEntity {
    pub name: String,
    /// `None` when the entry carries neither a network nor an FQDN.
    pub value: Option<AddressValue>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressGroupEntity {
    pub name: String,
    /// Static members; empty for dynamic groups.
    pub members: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEntity {
    pub name: String,
    pub tcp_ports: Option<String>,
    pub udp_ports: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceGroupEntity {
    pub name: String,
    pub members: Vec<String>,
}

/// One IP/prefix entry on a layer-3 physical interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceBinding {
    pub physical: String,
    /// The address exactly as written in the export.
    pub cidr: String,
    pub network: IpNetwork,
    pub zone: Option<String>,
}

impl InterfaceBinding {
    /// `<physical>_<network address>_<prefix>`, sanitized.
    pub fn synthetic_name(&self) -> String {
        sanitize(&format!(
            "{}_{}_{}",
            self.physical,
            self.network.network(),
            self.network.prefix()
        ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Map a PAN-OS weekday tag (`mon`, `tue`, …).
    pub fn from_abbrev(tag: &str) -> Option<Self> {
        match tag {
            "mon" => Some(Self::Monday),
            "tue" => Some(Self::Tuesday),
            "wed" => Some(Self::Wednesday),
            "thu" => Some(Self::Thursday),
            "fri" => Some(Self::Friday),
            "sat" => Some(Self::Saturday),
            "sun" => Some(Self::Sunday),
            _ => None,
        }
    }

    /// FortiOS day keyword.
    pub fn full_name(self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        }
    }
}

/// A weekday node of a recurring schedule with its `time` members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekdaySlot {
    pub day: Weekday,
    pub times: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleKind {
    /// Weekday nodes in document order.
    Recurring(Vec<WeekdaySlot>),
    /// Anything without a recurring block (absolute ranges included).
    Unsupported,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntity {
    pub name: String,
    pub kind: ScheduleKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyAction {
    Allow,
    Deny,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyEntity {
    pub name: String,
    pub disabled: bool,
    pub from_zones: Vec<String>,
    pub to_zones: Vec<String>,
    pub sources: Vec<String>,
    pub destinations: Vec<String>,
    pub services: Vec<String>,
    pub schedule: String,
    pub action: PolicyAction,
}

/// Locate the virtual system every object lives under.
pub fn vsys(root: &XmlNode) -> Option<&XmlNode> {
    root.find(&VSYS_PATH)
}

pub fn extract_addresses(vsys: &XmlNode) -> Vec<AddressEntity> {
    vsys.find_all(&["address", "entry"])
        .into_iter()
        .map(|entry| {
            let value = match (entry.text_at(&["ip-netmask"]), entry.text_at(&["fqdn"])) {
                (Some(net), _) => Some(AddressValue::Subnet(net.to_string())),
                (None, Some(fqdn)) => Some(AddressValue::Fqdn(fqdn.to_string())),
                (None, None) => None,
            };
            AddressEntity {
                name: entry_name(entry, NONAME),
                value,
                description: entry.text_at(&["description"]).map(str::to_string),
            }
        })
        .collect()
}

pub fn extract_address_groups(vsys: &XmlNode) -> Vec<AddressGroupEntity> {
    vsys.find_all(&["address-group", "entry"])
        .into_iter()
        .map(|entry| AddressGroupEntity {
            name: entry_name(entry, NONAME),
            members: member_list(entry, "static"),
        })
        .collect()
}

pub fn extract_services(vsys: &XmlNode) -> Vec<ServiceEntity> {
    vsys.find_all(&["service", "entry"])
        .into_iter()
        .map(|entry| {
            let port = |proto: &str| {
                entry
                    .text_at(&["protocol", proto, "port"])
                    .map(str::to_string)
            };
            ServiceEntity {
                name: entry_name(entry, NONAME),
                tcp_ports: port("tcp"),
                udp_ports: port("udp"),
            }
        })
        .collect()
}

pub fn extract_service_groups(vsys: &XmlNode) -> Vec<ServiceGroupEntity> {
    vsys.find_all(&["service-group", "entry"])
        .into_iter()
        .map(|entry| ServiceGroupEntity {
            name: entry_name(entry, NONAME),
            members: member_list(entry, "members"),
        })
        .collect()
}

/// Read layer-3 bindings from the device root (interfaces sit outside vsys).
///
/// Entries whose name does not parse as an interface address are dropped.
pub fn extract_interfaces(root: &XmlNode) -> Vec<InterfaceBinding> {
    let mut bindings = Vec::new();
    for eth in root.find_all(&ETHERNET_PATH) {
        let physical = entry_name(eth, NONAME);
        let Some(layer3) = eth.get_child("layer3") else {
            continue;
        };
        let zone = layer3.text_at(&["zone"]).map(str::to_string);
        for ip in layer3.find_all(&["ip", "entry"]) {
            let Some(cidr) = ip.attr("name").map(str::trim).filter(|c| !c.is_empty()) else {
                debug!(interface = %physical, "skipping ip entry without a name");
                continue;
            };
            let network = match IpNetwork::from_str(cidr) {
                Ok(network) => network,
                Err(err) => {
                    debug!(interface = %physical, cidr, %err, "skipping unparsable interface address");
                    continue;
                }
            };
            bindings.push(InterfaceBinding {
                physical: physical.clone(),
                cidr: cidr.to_string(),
                network,
                zone: zone.clone(),
            });
        }
    }
    bindings
}

pub fn extract_schedules(vsys: &XmlNode) -> Vec<ScheduleEntity> {
    vsys.find_all(&["schedule", "entry"])
        .into_iter()
        .map(|entry| {
            let kind = match entry.find(&["schedule-type", "recurring"]) {
                Some(recurring) => ScheduleKind::Recurring(
                    recurring
                        .children
                        .iter()
                        .filter_map(|node| {
                            Weekday::from_abbrev(&node.tag).map(|day| WeekdaySlot {
                                day,
                                times: member_list(node, "time"),
                            })
                        })
                        .collect(),
                ),
                None => ScheduleKind::Unsupported,
            };
            ScheduleEntity {
                name: entry_name(entry, NONAME),
                kind,
            }
        })
        .collect()
}

/// Security rules in rulebase order, with list and scalar defaults applied.
pub fn extract_policies(vsys: &XmlNode) -> Vec<PolicyEntity> {
    vsys.find_all(&["rulebase", "security", "rules", "entry"])
        .into_iter()
        .map(|rule| {
            let name = entry_name(rule, "rule");
            let action = match rule.text_at(&["action"]) {
                Some("allow") => PolicyAction::Allow,
                Some("deny") => PolicyAction::Deny,
                other => {
                    debug!(rule = %name, action = ?other, "defaulting policy action to deny");
                    PolicyAction::Deny
                }
            };
            PolicyEntity {
                disabled: rule.text_at(&["disabled"]) == Some("yes"),
                from_zones: member_list(rule, "from"),
                to_zones: member_list(rule, "to"),
                sources: or_any(member_list(rule, "source")),
                destinations: or_any(member_list(rule, "destination")),
                services: or_any(member_list(rule, "service")),
                schedule: rule.text_at(&["schedule"]).unwrap_or("always").to_string(),
                action,
                name,
            }
        })
        .collect()
}

fn entry_name(entry: &XmlNode, fallback: &str) -> String {
    entry.attr("name").unwrap_or(fallback).to_string()
}

/// Members of the `container` child, or nothing when it is absent.
fn member_list(parent: &XmlNode, container: &str) -> Vec<String> {
    parent
        .get_child(container)
        .map(XmlNode::members)
        .unwrap_or_default()
}

fn or_any(members: Vec<String>) -> Vec<String> {
    if members.is_empty() {
        vec!["any".to_string()]
    } else {
        members
    }
}
