//! FortiOS CLI directive model and per-channel text buffers.
//!
//! Translators produce [`Record`]s; [`ChannelOutput`] renders them into the
//! line-oriented form FortiOS accepts:
//!
//! ```text
//! edit <identifier>
//! set <key> <value>
//! next
//! ```

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::profile::ChannelFiles;

/// Output channel, one per entity category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Channel {
    Addresses,
    AddressGroups,
    Services,
    Interfaces,
    Policies,
    Schedules,
}

impl Channel {
    pub const ALL: [Channel; 6] = [
        Channel::Addresses,
        Channel::AddressGroups,
        Channel::Services,
        Channel::Interfaces,
        Channel::Policies,
        Channel::Schedules,
    ];
}

/// A single line inside an `edit … next` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    Set { key: String, value: String },
    Append { key: String, value: String },
}

/// One `edit <id> … next` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub id: String,
    pub directives: Vec<Directive>,
}

impl Block {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            directives: Vec::new(),
        }
    }

    pub fn set(mut self, key: &str, value: impl Into<String>) -> Self {
        self.push_set(key, value);
        self
    }

    pub fn push_set(&mut self, key: &str, value: impl Into<String>) {
        self.directives.push(Directive::Set {
            key: key.to_string(),
            value: value.into(),
        });
    }

    pub fn append(mut self, key: &str, value: impl Into<String>) -> Self {
        self.directives.push(Directive::Append {
            key: key.to_string(),
            value: value.into(),
        });
        self
    }
}

/// Anything a translator can emit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Block(Block),
    /// A `#` comment line for manual follow-up.
    Annotation(String),
}

/// Counts of what was written to one channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChannelCounts {
    pub blocks: usize,
    pub annotations: usize,
}

/// Append-only text buffers, one per [`Channel`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelOutput {
    buffers: BTreeMap<Channel, String>,
    counts: BTreeMap<Channel, ChannelCounts>,
}

impl ChannelOutput {
    /// Render `records` onto the end of `channel`.
    pub fn emit(&mut self, channel: Channel, records: &[Record]) {
        let buffer = self.buffers.entry(channel).or_default();
        let counts = self.counts.entry(channel).or_default();
        for record in records {
            match record {
                Record::Block(block) => {
                    render_block(block, buffer);
                    counts.blocks += 1;
                }
                Record::Annotation(text) => {
                    let _ = writeln!(buffer, "# {text}");
                    counts.annotations += 1;
                }
            }
        }
    }

    /// Rendered text of one channel; empty when nothing was emitted.
    pub fn text(&self, channel: Channel) -> &str {
        self.buffers.get(&channel).map(String::as_str).unwrap_or("")
    }

    pub fn counts(&self, channel: Channel) -> ChannelCounts {
        self.counts.get(&channel).copied().unwrap_or_default()
    }

    /// Write every channel to its file under `dir`, creating empty files for
    /// channels that received nothing.
    pub fn write_dir(&self, dir: &Path, files: &ChannelFiles) -> std::io::Result<()> {
        fs::create_dir_all(dir)?;
        for (channel, path) in files.paths(dir) {
            fs::write(&path, self.text(channel))?;
        }
        Ok(())
    }
}

fn render_block(block: &Block, out: &mut String) {
    let _ = writeln!(out, "edit {}", block.id);
    for directive in &block.directives {
        let _ = match directive {
            Directive::Set { key, value } => writeln!(out, "set {key} {value}"),
            Directive::Append { key, value } => writeln!(out, "append {key} {value}"),
        };
    }
    out.push_str("next\n");
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::{Block, Channel, ChannelOutput, Record};
    use crate::profile::ChannelFiles;

    #[test]
    fn renders_edit_set_next_framing() {
        let mut out = ChannelOutput::default();
        let block = Block::new("WebSrv")
            .set("subnet", "10.0.0.0/24")
            .set("comment", "prod");
        out.emit(Channel::Addresses, &[Record::Block(block)]);

        assert_eq!(
            out.text(Channel::Addresses),
            "edit WebSrv\nset subnet 10.0.0.0/24\nset comment prod\nnext\n"
        );
    }

    #[test]
    fn renders_append_and_annotations() {
        let mut out = ChannelOutput::default();
        out.emit(
            Channel::Services,
            &[
                Record::Block(Block::new("G").append("member", "A")),
                Record::Annotation("service-group SG member http".to_string()),
            ],
        );

        assert_eq!(
            out.text(Channel::Services),
            "edit G\nappend member A\nnext\n# service-group SG member http\n"
        );
        let counts = out.counts(Channel::Services);
        assert_eq!((counts.blocks, counts.annotations), (1, 1));
    }

    #[test]
    fn untouched_channel_is_empty() {
        let out = ChannelOutput::default();
        assert_eq!(out.text(Channel::Schedules), "");
        assert_eq!(out.counts(Channel::Schedules).blocks, 0);
    }

    #[test]
    fn write_dir_creates_all_six_files() {
        let dir = tempdir().expect("tempdir");
        let target = dir.path().join("Output");
        let mut out = ChannelOutput::default();
        out.emit(Channel::Policies, &[Record::Block(Block::new("1"))]);

        out.write_dir(&target, &ChannelFiles::default())
            .expect("write channels");

        for (channel, path) in ChannelFiles::default().paths(&target) {
            let text = std::fs::read_to_string(&path).expect("channel file");
            assert_eq!(text, out.text(channel));
        }
    }
}
