//! Document builder
//!
//! Maps classified blocks to element tree fragments and assembles the
//! document root. Inline content goes through the tokenizer; fenced code
//! does not.

use marksite_core::Element;

use crate::block::{classify, segment, BlockType};
use crate::inline::{tokenize, TextSpan};
use crate::ConvertError;

/// Build the element tree for a whole document.
///
/// The root is a `div` container holding one fragment per block, in
/// document order.
pub fn build(document: &str) -> Element {
    let children = segment(document)
        .iter()
        .map(|block| match classify(block) {
            BlockType::Heading(level) => heading_element(block, level),
            BlockType::Paragraph => Element::container("p", inline_children(block)),
            BlockType::Quote => quote_element(block),
            BlockType::UnorderedList => unordered_list_element(block),
            BlockType::OrderedList => ordered_list_element(block),
            BlockType::CodeBlock => code_element(block),
        })
        .collect();

    Element::container("div", children)
}

/// Extract the document title: the first level-1 heading, prefix stripped.
///
/// Other heading levels never qualify, even when they come first.
pub fn extract_title(document: &str) -> Result<String, ConvertError> {
    for block in segment(document) {
        if classify(&block) == BlockType::Heading(1) {
            if let Some(title) = block.strip_prefix("# ") {
                return Ok(title.to_string());
            }
        }
    }
    Err(ConvertError::NoTitle)
}

/// Tokenize inline text and map each span to an element.
fn inline_children(text: &str) -> Vec<Element> {
    tokenize(text).into_iter().map(span_element).collect()
}

fn span_element(span: TextSpan) -> Element {
    match span {
        TextSpan::Plain(text) => Element::text(text),
        TextSpan::Bold(text) => Element::leaf("b", text),
        TextSpan::Italic(text) => Element::leaf("i", text),
        TextSpan::Code(text) => Element::leaf("code", text),
        TextSpan::Link { text, url } => Element::leaf_with_attrs("a", text, vec![("href", url)]),
        TextSpan::Image { alt, url } => {
            Element::leaf_with_attrs("img", "", vec![("src", url), ("alt", alt)])
        }
    }
}

fn heading_element(block: &str, level: u8) -> Element {
    // classify guaranteed `level` hashes and one space, both ASCII.
    let text = &block[level as usize + 1..];
    Element::container(&format!("h{level}"), inline_children(text))
}

fn quote_element(block: &str) -> Element {
    let text = block
        .lines()
        .map(|line| line.strip_prefix("> ").unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n");
    Element::container("blockquote", inline_children(&text))
}

fn unordered_list_element(block: &str) -> Element {
    let items = block
        .lines()
        .map(|line| {
            let text = line
                .strip_prefix("* ")
                .or_else(|| line.strip_prefix("- "))
                .unwrap_or(line);
            Element::container("li", inline_children(text))
        })
        .collect();
    Element::container("ul", items)
}

fn ordered_list_element(block: &str) -> Element {
    let items = block
        .lines()
        .enumerate()
        .map(|(i, line)| {
            let marker = format!("{}. ", i + 1);
            let text = line.strip_prefix(&marker).unwrap_or(line);
            Element::container("li", inline_children(text))
        })
        .collect();
    Element::container("ol", items)
}

/// Fence lines stripped, interior joined verbatim. Code content never goes
/// through the inline tokenizer.
fn code_element(block: &str) -> Element {
    let lines: Vec<&str> = block.lines().collect();
    let interior = if lines.len() > 2 {
        lines[1..lines.len() - 1].join("\n")
    } else {
        String::new()
    };
    Element::container("pre", vec![Element::leaf("code", interior)])
}
