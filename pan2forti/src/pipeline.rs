//! Translation run: extract → translate → emit, one category at a time.
//!
//! Categories are independent over the read-only source tree. The only state
//! carried between entities is the [`PolicySequence`], created fresh for each
//! run so two runs over the same tree produce identical channels.

use thiserror::Error;
use tracing::info;
use xml_tree_core::XmlNode;

use crate::emit::{Channel, ChannelOutput, Record};
use crate::extract::{self, VSYS_PATH};
use crate::profile::TargetProfile;
use crate::translate::addresses::{translate_address, translate_address_group};
use crate::translate::interfaces::translate_interface;
use crate::translate::policies::{translate_policy, PolicySequence};
use crate::translate::schedules::translate_schedule;
use crate::translate::services::{translate_service, translate_service_group};

/// Conditions that stop a run before anything is translated.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("could not locate vsys configuration at {}", VSYS_PATH.join("/"))]
    MissingVsys,
}

/// Everything one run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub channels: ChannelOutput,
    /// Rules skipped because they were disabled.
    pub disabled_policies: usize,
}

/// Translate a parsed PAN-OS export into the six FortiOS channels.
///
/// # Errors
///
/// Returns [`TranslateError::MissingVsys`] when the export has no virtual
/// system; no channel is populated in that case.
pub fn translate_config(
    root: &XmlNode,
    profile: &TargetProfile,
) -> Result<Translation, TranslateError> {
    let vsys = extract::vsys(root).ok_or(TranslateError::MissingVsys)?;
    let mut channels = ChannelOutput::default();

    let addresses = extract::extract_addresses(vsys);
    emit_all(&mut channels, Channel::Addresses, &addresses, translate_address);
    let groups = extract::extract_address_groups(vsys);
    emit_all(&mut channels, Channel::AddressGroups, &groups, translate_address_group);
    let services = extract::extract_services(vsys);
    emit_all(&mut channels, Channel::Services, &services, translate_service);
    let service_groups = extract::extract_service_groups(vsys);
    emit_all(&mut channels, Channel::Services, &service_groups, translate_service_group);
    let bindings = extract::extract_interfaces(root);
    emit_all(&mut channels, Channel::Interfaces, &bindings, |b| {
        translate_interface(b, profile)
    });
    let schedules = extract::extract_schedules(vsys);
    emit_all(&mut channels, Channel::Schedules, &schedules, translate_schedule);

    let policies = extract::extract_policies(vsys);
    let disabled_policies = policies.iter().filter(|p| p.disabled).count();
    let mut sequence = PolicySequence::new();
    emit_all(&mut channels, Channel::Policies, &policies, |p| {
        translate_policy(p, &mut sequence, profile)
    });

    for channel in Channel::ALL {
        let counts = channels.counts(channel);
        info!(?channel, blocks = counts.blocks, annotations = counts.annotations, "channel translated");
    }

    Ok(Translation {
        channels,
        disabled_policies,
    })
}

fn emit_all<T>(
    channels: &mut ChannelOutput,
    channel: Channel,
    entities: &[T],
    mut translate: impl FnMut(&T) -> Vec<Record>,
) {
    for entity in entities {
        channels.emit(channel, &translate(entity));
    }
}

#[cfg(test)]
mod tests {
    use xml_tree_core::parse;

    use super::{translate_config, TranslateError};
    use crate::emit::Channel;
    use crate::profile::TargetProfile;

    #[test]
    fn missing_vsys_is_fatal() {
        let root = parse(br#"<config><devices><entry name="fw"/></devices></config>"#)
            .expect("parse");
        let err = translate_config(&root, &TargetProfile::default()).expect_err("no vsys");
        assert!(matches!(err, TranslateError::MissingVsys));
    }

    #[test]
    fn empty_vsys_yields_empty_channels() {
        let root = parse(
            br#"<config><devices><entry><vsys><entry name="vsys1"/></vsys></entry></devices></config>"#,
        )
        .expect("parse");
        let translation = translate_config(&root, &TargetProfile::default()).expect("translate");
        for channel in Channel::ALL {
            assert_eq!(translation.channels.text(channel), "");
        }
        assert_eq!(translation.disabled_policies, 0);
    }

    #[test]
    fn service_groups_follow_services_on_the_same_channel() {
        let root = parse(
            br#"<config><devices><entry><vsys><entry name="vsys1">
                <service-group><entry name="web"><members><member>http</member></members></entry></service-group>
                <service><entry name="http"><protocol><tcp><port>80</port></tcp></protocol></entry></service>
            </entry></vsys></entry></devices></config>"#,
        )
        .expect("parse");
        let translation = translate_config(&root, &TargetProfile::default()).expect("translate");
        assert_eq!(
            translation.channels.text(Channel::Services),
            "edit http\nset tcp-portrange 80\nnext\n# service-group web member http\n"
        );
    }
}
