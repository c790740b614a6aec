use std::fs;
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::QName;
use quick_xml::Reader;
use thiserror::Error;

use crate::tree::XmlNode;

/// Errors that can occur while reading an export into an [`XmlNode`] tree.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Input XML could not be tokenized.
    #[error("failed to parse XML: {0}")]
    Xml(#[from] quick_xml::Error),
    /// Tag, attribute, or CDATA bytes were not valid UTF-8.
    #[error("invalid UTF-8 while parsing XML: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    /// An entity or character reference could not be decoded.
    #[error("failed to decode XML text: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),
    /// Failed to read the input file.
    #[error("failed to read XML file: {0}")]
    Io(#[from] std::io::Error),
    /// Structural issue in the document.
    #[error("malformed XML: {0}")]
    Malformed(String),
}

/// Parse XML bytes into an [`XmlNode`] tree.
///
/// Whitespace-only text runs between elements are dropped; any other text is
/// kept verbatim, so callers decide whether to trim.
pub fn parse(xml: &[u8]) -> Result<XmlNode, ParseError> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(false);

    let mut buf = Vec::new();
    let mut open: Vec<XmlNode> = Vec::new();
    let mut root: Option<XmlNode> = None;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => open.push(start_node(&e, &reader)?),
            Event::Empty(e) => {
                let node = start_node(&e, &reader)?;
                attach(node, &mut open, &mut root)?;
            }
            Event::Text(e) => {
                let text = e.unescape()?;
                append_text(&mut open, &text);
            }
            Event::CData(e) => {
                let text = std::str::from_utf8(e.as_ref())?;
                append_text(&mut open, text);
            }
            Event::End(_) => {
                let node = open.pop().ok_or_else(|| {
                    ParseError::Malformed("encountered closing tag without open tag".to_string())
                })?;
                attach(node, &mut open, &mut root)?;
            }
            Event::Eof => break,
            Event::Decl(_) | Event::PI(_) | Event::DocType(_) | Event::Comment(_) => {}
        }
        buf.clear();
    }

    if !open.is_empty() {
        return Err(ParseError::Malformed(
            "unclosed element(s) at end of document".to_string(),
        ));
    }

    root.ok_or_else(|| ParseError::Malformed("no root element found".to_string()))
}

/// Parse an XML file into an [`XmlNode`] tree.
pub fn parse_file(path: &Path) -> Result<XmlNode, ParseError> {
    let bytes = fs::read(path)?;
    parse(&bytes)
}

/// Hand a finished element to its parent, or make it the document root.
fn attach(
    node: XmlNode,
    open: &mut [XmlNode],
    root: &mut Option<XmlNode>,
) -> Result<(), ParseError> {
    if let Some(parent) = open.last_mut() {
        parent.children.push(node);
        return Ok(());
    }
    if root.is_some() {
        return Err(ParseError::Malformed(
            "multiple top-level elements found".to_string(),
        ));
    }
    *root = Some(node);
    Ok(())
}

fn append_text(open: &mut [XmlNode], text: &str) {
    let Some(current) = open.last_mut() else {
        return;
    };
    if text.trim().is_empty() {
        return;
    }
    match &mut current.text {
        Some(existing) => existing.push_str(text),
        None => current.text = Some(text.to_string()),
    }
}

fn start_node(e: &BytesStart<'_>, reader: &Reader<&[u8]>) -> Result<XmlNode, ParseError> {
    let mut node = XmlNode::new(qname_to_string(e.name())?);

    for attr in e.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let key = qname_to_string(attr.key)?;
        let value = attr
            .decode_and_unescape_value(reader.decoder())?
            .into_owned();
        node.attributes.insert(key, value);
    }

    Ok(node)
}

fn qname_to_string(name: QName<'_>) -> Result<String, ParseError> {
    Ok(std::str::from_utf8(name.as_ref())?.to_string())
}

#[cfg(test)]
mod tests {
    use super::{parse, ParseError};

    #[test]
    fn keeps_entry_name_attributes() {
        let node = parse(br#"<config><entry name="web srv"/></config>"#).expect("parse");
        assert_eq!(node.children[0].attr("name"), Some("web srv"));
    }

    #[test]
    fn decodes_escaped_text() {
        let node = parse(br#"<d>a &amp; b</d>"#).expect("parse");
        assert_eq!(node.text.as_deref(), Some("a & b"));
    }

    #[test]
    fn rejects_second_top_level_element() {
        let err = parse(br#"<a/><b/>"#).expect_err("two roots");
        assert!(matches!(err, ParseError::Malformed(_)));
    }

    #[test]
    fn rejects_unclosed_element() {
        assert!(parse(br#"<a><b></b>"#).is_err());
    }
}
