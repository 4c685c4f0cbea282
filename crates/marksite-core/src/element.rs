//! HTML element tree nodes.
//!
//! An element is either a leaf carrying a literal value or a container
//! owning an ordered sequence of children. Attributes render in insertion
//! order, so the map type must preserve it.

use indexmap::IndexMap;

/// Ordered attribute map, rendered in insertion order.
pub type Attrs = IndexMap<String, String>;

/// A node in the HTML element tree.
///
/// The `tag`, `value` and `children` fields are optional so that the
/// serializer can distinguish an absent field (a construction error) from a
/// present-but-empty one. The constructors below only produce valid shapes;
/// invalid ones are rejected at serialization time.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// A node with a literal value and no children. A leaf without a tag
    /// renders as raw text.
    Leaf {
        tag: Option<String>,
        value: Option<String>,
        attrs: Attrs,
    },

    /// A node whose rendering is the concatenation of its children's
    /// renderings, wrapped in its tag.
    Container {
        tag: Option<String>,
        children: Option<Vec<Element>>,
        attrs: Attrs,
    },
}

impl Element {
    /// Create a raw text leaf (no tag).
    pub fn text(value: impl Into<String>) -> Self {
        Element::Leaf {
            tag: None,
            value: Some(value.into()),
            attrs: Attrs::new(),
        }
    }

    /// Create a tagged leaf.
    pub fn leaf(tag: &str, value: impl Into<String>) -> Self {
        Element::Leaf {
            tag: Some(tag.to_string()),
            value: Some(value.into()),
            attrs: Attrs::new(),
        }
    }

    /// Create a tagged leaf with attributes.
    pub fn leaf_with_attrs(
        tag: &str,
        value: impl Into<String>,
        attrs: Vec<(&str, String)>,
    ) -> Self {
        Element::Leaf {
            tag: Some(tag.to_string()),
            value: Some(value.into()),
            attrs: attrs.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
        }
    }

    /// Create a container.
    pub fn container(tag: &str, children: Vec<Element>) -> Self {
        Element::Container {
            tag: Some(tag.to_string()),
            children: Some(children),
            attrs: Attrs::new(),
        }
    }

    /// Create a container with attributes.
    pub fn container_with_attrs(
        tag: &str,
        children: Vec<Element>,
        attrs: Vec<(&str, String)>,
    ) -> Self {
        Element::Container {
            tag: Some(tag.to_string()),
            children: Some(children),
            attrs: attrs.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
        }
    }

    /// Check if this is a leaf node
    pub fn is_leaf(&self) -> bool {
        matches!(self, Element::Leaf { .. })
    }

    /// Check if this is a container node
    pub fn is_container(&self) -> bool {
        matches!(self, Element::Container { .. })
    }

    /// Get the tag, if any.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Element::Leaf { tag, .. } | Element::Container { tag, .. } => tag.as_deref(),
        }
    }
}
