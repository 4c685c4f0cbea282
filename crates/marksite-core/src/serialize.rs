//! Element tree serialization
//!
//! Converts an element tree into an HTML string.

use crate::element::{Attrs, Element};
use crate::{RenderError, Result};

/// Serialize an element tree to an HTML string.
///
/// Pure function of the tree: calling it twice on the same tree yields
/// byte-identical output.
pub fn serialize(element: &Element) -> Result<String> {
    let mut output = String::with_capacity(256);
    serialize_element(element, &mut output)?;
    Ok(output)
}

fn serialize_element(element: &Element, out: &mut String) -> Result<()> {
    match element {
        Element::Leaf { tag, value, attrs } => {
            let value = value.as_deref().ok_or(RenderError::MissingValue)?;

            match tag.as_deref() {
                // An untagged leaf renders its value verbatim.
                None => out.push_str(value),
                Some(tag) => {
                    open_tag(tag, attrs, out);
                    out.push_str(value);
                    close_tag(tag, out);
                }
            }
        }

        Element::Container {
            tag,
            children,
            attrs,
        } => {
            let tag = tag.as_deref().ok_or(RenderError::MissingTag)?;
            // Absent children are a construction error; an empty sequence
            // is valid and renders an empty body.
            let children = children.as_deref().ok_or(RenderError::MissingChildren)?;

            open_tag(tag, attrs, out);
            for child in children {
                serialize_element(child, out)?;
            }
            close_tag(tag, out);
        }
    }

    Ok(())
}

fn open_tag(tag: &str, attrs: &Attrs, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    for (key, value) in attrs {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_leaf_renders_verbatim() {
        let el = Element::text("just text");
        assert_eq!(serialize(&el).unwrap(), "just text");
    }

    #[test]
    fn test_tagged_leaf() {
        let el = Element::leaf("p", "Hello World");
        assert_eq!(serialize(&el).unwrap(), "<p>Hello World</p>");
    }

    #[test]
    fn test_leaf_with_attrs() {
        let el = Element::leaf_with_attrs(
            "a",
            "Click here",
            vec![("href", "https://example.com".to_string())],
        );
        assert_eq!(
            serialize(&el).unwrap(),
            "<a href=\"https://example.com\">Click here</a>"
        );
    }

    #[test]
    fn test_attrs_render_in_insertion_order() {
        let el = Element::leaf_with_attrs(
            "img",
            "",
            vec![("src", "pic.png".to_string()), ("alt", "A pic".to_string())],
        );
        assert_eq!(
            serialize(&el).unwrap(),
            "<img src=\"pic.png\" alt=\"A pic\"></img>"
        );
    }

    #[test]
    fn test_leaf_empty_value_is_valid() {
        let el = Element::leaf("code", "");
        assert_eq!(serialize(&el).unwrap(), "<code></code>");
    }

    #[test]
    fn test_leaf_missing_value_fails() {
        let el = Element::Leaf {
            tag: Some("p".to_string()),
            value: None,
            attrs: Attrs::new(),
        };
        assert_eq!(serialize(&el), Err(RenderError::MissingValue));
    }

    #[test]
    fn test_container_concatenates_children() {
        let el = Element::container(
            "p",
            vec![
                Element::text("a "),
                Element::leaf("b", "bold"),
                Element::text(" z"),
            ],
        );
        assert_eq!(serialize(&el).unwrap(), "<p>a <b>bold</b> z</p>");
    }

    #[test]
    fn test_nested_containers() {
        let el = Element::container(
            "div",
            vec![Element::container(
                "ul",
                vec![
                    Element::container("li", vec![Element::text("one")]),
                    Element::container("li", vec![Element::text("two")]),
                ],
            )],
        );
        assert_eq!(
            serialize(&el).unwrap(),
            "<div><ul><li>one</li><li>two</li></ul></div>"
        );
    }

    #[test]
    fn test_container_with_attrs() {
        let el = Element::container_with_attrs(
            "div",
            vec![Element::text("x")],
            vec![("class", "note".to_string())],
        );
        assert_eq!(serialize(&el).unwrap(), "<div class=\"note\">x</div>");
    }

    #[test]
    fn test_container_empty_children_is_valid() {
        let el = Element::container("div", vec![]);
        assert_eq!(serialize(&el).unwrap(), "<div></div>");
    }

    #[test]
    fn test_container_missing_tag_fails() {
        let el = Element::Container {
            tag: None,
            children: Some(vec![]),
            attrs: Attrs::new(),
        };
        assert_eq!(serialize(&el), Err(RenderError::MissingTag));
    }

    #[test]
    fn test_container_missing_children_fails() {
        let el = Element::Container {
            tag: Some("div".to_string()),
            children: None,
            attrs: Attrs::new(),
        };
        assert_eq!(serialize(&el), Err(RenderError::MissingChildren));
    }

    #[test]
    fn test_serialization_is_deterministic() {
        let el = Element::container(
            "div",
            vec![Element::leaf_with_attrs(
                "img",
                "",
                vec![("src", "u".to_string()), ("alt", "a".to_string())],
            )],
        );
        assert_eq!(serialize(&el).unwrap(), serialize(&el).unwrap());
    }
}
