use std::collections::BTreeMap;

/// A generic XML element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlNode {
    /// Element tag name.
    pub tag: String,
    /// XML attributes keyed by name.
    pub attributes: BTreeMap<String, String>,
    /// Child elements in document order.
    pub children: Vec<XmlNode>,
    /// Optional text content.
    pub text: Option<String>,
}

impl XmlNode {
    /// Create a new element with no attributes, children, or text.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
            text: None,
        }
    }

    /// Return the first child with the provided tag.
    pub fn get_child(&self, tag: &str) -> Option<&XmlNode> {
        self.children.iter().find(|child| child.tag == tag)
    }

    /// Return all children with the provided tag, in document order.
    pub fn get_children(&self, tag: &str) -> Vec<&XmlNode> {
        self.children
            .iter()
            .filter(|child| child.tag == tag)
            .collect()
    }

    /// Return an attribute value.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Follow `path` taking the first matching child at every step.
    ///
    /// An empty path returns `self`.
    pub fn find(&self, path: &[&str]) -> Option<&XmlNode> {
        path.iter()
            .try_fold(self, |current, segment| current.get_child(segment))
    }

    /// Collect every element reachable through `path`, branching on each
    /// repeated tag along the way.
    ///
    /// `find_all(&["address", "entry"])` yields the entries of every
    /// `address` child, in document order.
    pub fn find_all(&self, path: &[&str]) -> Vec<&XmlNode> {
        let mut level = vec![self];
        for segment in path {
            level = level
                .into_iter()
                .flat_map(|node| node.children.iter().filter(|c| c.tag == *segment))
                .collect();
        }
        level
    }

    /// Trimmed text of the element at `path`, if present and non-empty.
    pub fn text_at(&self, path: &[&str]) -> Option<&str> {
        let value = self.find(path)?.text.as_deref()?.trim();
        (!value.is_empty()).then_some(value)
    }

    /// Trimmed texts of this element's `member` children.
    ///
    /// Empty members are dropped.
    pub fn members(&self) -> Vec<String> {
        self.get_children("member")
            .into_iter()
            .filter_map(|m| m.text.as_deref())
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .collect()
    }
}
