//! Palo Alto PAN-OS to FortiGate FortiOS configuration translation.
//!
//! Reads a parsed PAN-OS XML export and re-expresses its objects and security
//! rules as FortiOS CLI blocks, split into six text channels (addresses,
//! address groups, services, interfaces, policies, schedules).
//!
//! # Architecture
//!
//! - [`sanitize`] — FortiOS name normalization
//! - [`extract`] — typed entity views over the XML tree
//! - [`translate`] — per-category mapping to FortiOS records
//! - [`emit`] — `edit … set … next` rendering into channels
//! - [`pipeline`] — one translation run, including policy numbering
//! - [`profile`] — fixed target values and output file names (TOML)
//! - [`conversion_summary`] / [`inspect`] — reporting
//!
//! # Examples
//!
//! ```ignore
//! use pan2forti::pipeline::translate_config;
//! use pan2forti::profile::TargetProfile;
//! use xml_tree_core::parse_file;
//!
//! let root = parse_file("merged-running-config.xml".as_ref())?;
//! let profile = TargetProfile::embedded()?;
//! let translation = translate_config(&root, &profile)?;
//! translation.channels.write_dir("Output".as_ref(), &profile.files)?;
//! ```
//!
//! Name collisions after sanitizing are not detected. Service groups are
//! written as comments, not FortiOS groups.

pub mod conversion_summary;
pub mod emit;
pub mod extract;
pub mod inspect;
pub mod pipeline;
pub mod profile;
pub mod sanitize;
pub mod translate;

pub use pipeline::{translate_config, TranslateError, Translation};
