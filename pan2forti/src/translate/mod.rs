//! Per-category mapping from extracted PAN-OS entities to FortiOS records.
//!
//! Translators are pure: each takes one entity and returns the records to
//! emit for it, possibly none. The only cross-entity state is the policy
//! [`PolicySequence`](policies::PolicySequence), passed in by the caller.

pub mod addresses;
pub mod interfaces;
pub mod policies;
pub mod schedules;
pub mod services;

/// Comment value FortiOS reads as an empty string.
pub(crate) const EMPTY_COMMENT: &str = "''";

/// Wrap a value in single quotes the way FortiOS prints profile references.
pub(crate) fn quoted(value: &str) -> String {
    format!("'{value}'")
}
