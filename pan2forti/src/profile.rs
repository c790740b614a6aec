use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::emit::Channel;

/// Fixed target-side values written into generated objects.
///
/// Every field is optional in a user-supplied TOML file; missing fields keep
/// the built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TargetProfile {
    /// Virtual domain every generated interface is bound to.
    pub vdom: String,
    /// `allowaccess` value for generated interfaces.
    pub allowaccess: String,
    /// SSL/SSH inspection profile attached to accept policies.
    pub ssl_ssh_profile: String,
    /// IPS sensor attached to accept policies.
    pub ips_sensor: String,
    pub files: ChannelFiles,
}

/// Output file name for each channel, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChannelFiles {
    pub addresses: String,
    pub address_groups: String,
    pub services: String,
    pub interfaces: String,
    pub policies: String,
    pub schedules: String,
}

/// Errors returned when loading a profile file.
#[derive(Debug, Error)]
pub enum ProfileLoadError {
    #[error("failed to read profile {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse profile {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("profile {path} maps both {first:?} and {second:?} to file {file}")]
    DuplicateFile {
        path: String,
        file: String,
        first: Channel,
        second: Channel,
    },
}

impl Default for TargetProfile {
    fn default() -> Self {
        Self {
            vdom: "root".to_string(),
            allowaccess: "ping".to_string(),
            ssl_ssh_profile: "certificate-inspection".to_string(),
            ips_sensor: "BM".to_string(),
            files: ChannelFiles::default(),
        }
    }
}

impl Default for ChannelFiles {
    fn default() -> Self {
        Self {
            addresses: "converted_addrs.txt".to_string(),
            address_groups: "converted_grp.txt".to_string(),
            services: "converted_ports.txt".to_string(),
            interfaces: "vlans.txt".to_string(),
            policies: "converted_policies.txt".to_string(),
            schedules: "converted_schedules.txt".to_string(),
        }
    }
}

impl TargetProfile {
    /// Profile shipped inside the binary.
    pub fn embedded() -> Result<Self, ProfileLoadError> {
        let raw = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/profiles/default.toml"));
        parse_profile(raw, "embedded profile".to_string())
    }
}

impl ChannelFiles {
    pub fn file_name(&self, channel: Channel) -> &str {
        match channel {
            Channel::Addresses => &self.addresses,
            Channel::AddressGroups => &self.address_groups,
            Channel::Services => &self.services,
            Channel::Interfaces => &self.interfaces,
            Channel::Policies => &self.policies,
            Channel::Schedules => &self.schedules,
        }
    }

    /// Full path of every channel file under `dir`, in channel order.
    pub fn paths(&self, dir: &Path) -> Vec<(Channel, PathBuf)> {
        Channel::ALL
            .iter()
            .map(|&channel| (channel, dir.join(self.file_name(channel))))
            .collect()
    }
}

/// Load a profile from a TOML file.
pub fn load_profile(path: &Path) -> Result<TargetProfile, ProfileLoadError> {
    let raw = fs::read_to_string(path).map_err(|source| ProfileLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    parse_profile(&raw, path.display().to_string())
}

fn parse_profile(raw: &str, path: String) -> Result<TargetProfile, ProfileLoadError> {
    let profile: TargetProfile = toml::from_str(raw).map_err(|source| ProfileLoadError::Parse {
        path: path.clone(),
        source,
    })?;
    ensure_distinct_files(&profile.files, path)?;
    Ok(profile)
}

/// Two channels sharing a file would make the later write replace the earlier.
fn ensure_distinct_files(files: &ChannelFiles, path: String) -> Result<(), ProfileLoadError> {
    let mut seen: Vec<(&str, Channel)> = Vec::new();
    for channel in Channel::ALL {
        let file = files.file_name(channel);
        if let Some(&(_, first)) = seen.iter().find(|(name, _)| *name == file) {
            return Err(ProfileLoadError::DuplicateFile {
                path,
                file: file.to_string(),
                first,
                second: channel,
            });
        }
        seen.push((file, channel));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{parse_profile, ChannelFiles, ProfileLoadError, TargetProfile};
    use crate::emit::Channel;

    #[test]
    fn embedded_profile_matches_builtin_defaults() {
        assert_eq!(
            TargetProfile::embedded().expect("embedded profile"),
            TargetProfile::default()
        );
    }

    #[test]
    fn partial_profile_keeps_other_defaults() {
        let profile = parse_profile(
            "vdom = \"branch\"\n[files]\npolicies = \"rules.txt\"\n",
            "inline".to_string(),
        )
        .expect("profile parse");

        assert_eq!(profile.vdom, "branch");
        assert_eq!(profile.ips_sensor, "BM");
        assert_eq!(profile.files.policies, "rules.txt");
        assert_eq!(profile.files.addresses, "converted_addrs.txt");
    }

    #[test]
    fn rejects_two_channels_sharing_a_file() {
        let err = parse_profile(
            "[files]\nservices = \"converted_addrs.txt\"\n",
            "inline".to_string(),
        )
        .expect_err("duplicate file");

        match err {
            ProfileLoadError::DuplicateFile {
                file,
                first,
                second,
                ..
            } => {
                assert_eq!(file, "converted_addrs.txt");
                assert_eq!(first, Channel::Addresses);
                assert_eq!(second, Channel::Services);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(parse_profile("vdom = [", "inline".to_string()).is_err());
    }

    #[test]
    fn paths_cover_every_channel() {
        let paths = ChannelFiles::default().paths(Path::new("out"));
        assert_eq!(paths.len(), Channel::ALL.len());
        assert_eq!(paths[4].0, Channel::Policies);
        assert_eq!(paths[4].1, Path::new("out").join("converted_policies.txt"));
    }
}
