//! Block segmentation and classification
//!
//! Splits a document into blank-line separated blocks and assigns each a
//! structural type from the textual shape alone.

/// The structural type of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    /// `# ` through `###### ` heading, with its level
    Heading(u8),

    /// Default block type
    Paragraph,

    /// `> ` quote
    Quote,

    /// `* ` or `- ` bullet list
    UnorderedList,

    /// `1. `, `2. `, ... numbered list
    OrderedList,

    /// Triple-backtick fenced code
    CodeBlock,
}

/// Split a document into block strings.
///
/// One or more consecutive blank lines act as a single separator. Empty
/// lines inside a block are dropped and the rest rejoined with single line
/// breaks; blocks that end up blank are discarded.
pub fn segment(document: &str) -> Vec<String> {
    document
        .split("\n\n")
        .filter_map(|chunk| {
            let lines: Vec<&str> = chunk.lines().filter(|line| !line.is_empty()).collect();
            let block = lines.join("\n");
            if block.trim().is_empty() {
                None
            } else {
                Some(block)
            }
        })
        .collect()
}

/// Classify a block by its textual shape.
///
/// Total over non-empty blocks: the checks run in a fixed precedence and
/// anything that matches none of them is a paragraph.
pub fn classify(block: &str) -> BlockType {
    if block.starts_with("```") && block.ends_with("```") {
        return BlockType::CodeBlock;
    }

    if let Some(level) = heading_level(block) {
        return BlockType::Heading(level);
    }

    if block.starts_with("> ") {
        return BlockType::Quote;
    }

    // A list only counts when every line carries the marker of the first
    // line; a block mixing `*` and `-` bullets falls through to paragraph.
    if block.starts_with("* ") {
        if block.lines().all(|line| line.starts_with("* ")) {
            return BlockType::UnorderedList;
        }
        return BlockType::Paragraph;
    }

    if block.starts_with("- ") {
        if block.lines().all(|line| line.starts_with("- ")) {
            return BlockType::UnorderedList;
        }
        return BlockType::Paragraph;
    }

    if block.starts_with("1. ") {
        if is_ordered_list(block) {
            return BlockType::OrderedList;
        }
        return BlockType::Paragraph;
    }

    BlockType::Paragraph
}

/// Heading level of a block: 1-6 leading `#` followed by a space.
fn heading_level(block: &str) -> Option<u8> {
    let hashes = block.bytes().take_while(|&b| b == b'#').count();
    if (1..=6).contains(&hashes) && block.as_bytes().get(hashes) == Some(&b' ') {
        Some(hashes as u8)
    } else {
        None
    }
}

/// Every line must carry a strictly incrementing `N. ` prefix starting at 1.
fn is_ordered_list(block: &str) -> bool {
    block
        .lines()
        .enumerate()
        .all(|(i, line)| line.starts_with(&format!("{}. ", i + 1)))
}
