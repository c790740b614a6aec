use tracing::debug;

use super::quoted;
use crate::emit::{Block, Record};
use crate::extract::{PolicyAction, PolicyEntity};
use crate::profile::TargetProfile;
use crate::sanitize::{sanitize, sanitize_joined};

/// Dense 1-based numbering for emitted policies.
///
/// Owned by one translation run and advanced only when a policy is actually
/// emitted, so disabled rules leave no gaps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicySequence {
    next: u32,
}

impl Default for PolicySequence {
    fn default() -> Self {
        Self::new()
    }
}

impl PolicySequence {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Id the next emitted policy will receive.
    pub fn peek(&self) -> u32 {
        self.next
    }

    fn advance(&mut self) {
        self.next += 1;
    }
}

/// `config firewall policy` entry.
///
/// Returns no records for disabled rules, leaving `sequence` untouched.
pub fn translate_policy(
    policy: &PolicyEntity,
    sequence: &mut PolicySequence,
    profile: &TargetProfile,
) -> Vec<Record> {
    if policy.disabled {
        debug!(rule = %policy.name, "skipping disabled policy");
        return Vec::new();
    }

    let id = sequence.peek();
    let action = match policy.action {
        PolicyAction::Allow => "accept",
        PolicyAction::Deny => "deny",
    };
    let schedule = if policy.schedule == "always" {
        "always".to_string()
    } else {
        sanitize(&policy.schedule)
    };

    let mut block = Block::new(id.to_string())
        .set("name", format!("{}-P{id}", sanitize(&policy.name)))
        .set("srcintf", zones(&policy.from_zones))
        .set("dstintf", zones(&policy.to_zones))
        .set("srcaddr", addresses(&policy.sources))
        .set("dstaddr", addresses(&policy.destinations))
        .set("schedule", schedule)
        .set("service", services(&policy.services))
        .set("action", action);
    if policy.action == PolicyAction::Allow {
        block.push_set("utm-status", "enable");
        block.push_set("ssl-ssh-profile", quoted(&profile.ssl_ssh_profile));
        block.push_set("ips-sensor", quoted(&profile.ips_sensor));
    }
    block.push_set("logtraffic", "all");

    sequence.advance();
    vec![Record::Block(block)]
}

fn is_only(members: &[String], token: &str) -> bool {
    matches!(members, [single] if single == token)
}

fn addresses(members: &[String]) -> String {
    if is_only(members, "any") {
        "all".to_string()
    } else {
        sanitize_joined(members)
    }
}

fn services(members: &[String]) -> String {
    if is_only(members, "any") || is_only(members, "application-default") {
        "ALL".to_string()
    } else {
        sanitize_joined(members)
    }
}

fn zones(members: &[String]) -> String {
    if members.is_empty() {
        "any".to_string()
    } else {
        sanitize_joined(members)
    }
}
