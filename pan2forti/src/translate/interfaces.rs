use super::quoted;
use crate::emit::{Block, Record};
use crate::extract::InterfaceBinding;
use crate::profile::TargetProfile;

/// `config system interface` entry for one IP binding.
///
/// Several bindings on the same physical port each get their own block; the
/// synthetic name keeps them apart.
pub fn translate_interface(binding: &InterfaceBinding, profile: &TargetProfile) -> Vec<Record> {
    let mut block = Block::new(binding.synthetic_name())
        .set("vdom", quoted(&profile.vdom))
        .set("ip", binding.cidr.as_str());
    if let Some(zone) = &binding.zone {
        block.push_set("alias", zone.as_str());
    }
    let block = block
        .set("allowaccess", profile.allowaccess.as_str())
        .set("status", "up");
    vec![Record::Block(block)]
}
