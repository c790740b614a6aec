//! Generic XML parsing and read-only tree queries used by the translator.

pub mod parser;
pub mod tree;

pub use parser::{parse, parse_file, ParseError};
pub use tree::XmlNode;
