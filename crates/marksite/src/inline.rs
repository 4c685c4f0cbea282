//! Inline tokenizer
//!
//! Converts a raw text string into an ordered sequence of typed spans,
//! resolving bold/italic/code delimiters and link/image syntax left to
//! right. Passes run over the accumulated span list and only re-split spans
//! still tagged [`TextSpan::Plain`], so the dialect never nests styles: the
//! inner `*` in `**bold with *stars* inside**` stays literal.

use once_cell::sync::Lazy;
use regex::Regex;

/// `[label](url)`, label free of `]` and url free of `)`.
static LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]*)\]\(([^)]*)\)").expect("valid link pattern"));

/// `![label](url)`.
static IMAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]*)\)").expect("valid image pattern"));

/// A contiguous fragment of inline text tagged with one style.
///
/// Link and image spans carry their URL inside the variant, so a span can
/// never claim a target it does not have.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSpan {
    /// Unstyled text
    Plain(String),

    /// `**bold**`
    Bold(String),

    /// `*italic*`
    Italic(String),

    /// `` `code` ``
    Code(String),

    /// `[text](url)`
    Link { text: String, url: String },

    /// `![alt](url)`
    Image { alt: String, url: String },
}

/// Tokenize a raw text string into typed spans.
///
/// Spans come out in left-to-right source order and never overlap.
/// Delimiter splitting is not pairing-aware: an odd number of delimiter
/// occurrences leaves the trailing fragment tagged with the style rather
/// than raising an error.
pub fn tokenize(text: &str) -> Vec<TextSpan> {
    let spans = vec![TextSpan::Plain(text.to_string())];
    let spans = split_delimiter(spans, "**", TextSpan::Bold);
    let spans = split_delimiter(spans, "*", TextSpan::Italic);
    let spans = split_delimiter(spans, "`", TextSpan::Code);
    let spans = split_links(spans);
    split_images(spans)
}

/// Split the plain spans in `spans` on `delimiter`, tagging every odd
/// fragment with `make`. The delimiter itself is discarded, and so are
/// empty fragments (e.g. around a delimiter at the start of the text).
fn split_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &str,
    make: fn(String) -> TextSpan,
) -> Vec<TextSpan> {
    let mut result = Vec::new();

    for span in spans {
        let text = match span {
            TextSpan::Plain(text) => text,
            styled => {
                result.push(styled);
                continue;
            }
        };

        for (i, piece) in text.split(delimiter).enumerate() {
            if piece.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                result.push(TextSpan::Plain(piece.to_string()));
            } else {
                result.push(make(piece.to_string()));
            }
        }
    }

    result
}

/// Split plain spans on `[label](url)` matches.
///
/// A match directly preceded by `!` is image syntax; it is left untouched
/// here so the image pass can consume it whole, instead of this pass eating
/// the bracket part and stranding the `!` in the surrounding text.
fn split_links(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_on_pattern(spans, &LINK, true, |label, url| TextSpan::Link {
        text: label.to_string(),
        url: url.to_string(),
    })
}

/// Split plain spans on `![label](url)` matches.
fn split_images(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_on_pattern(spans, &IMAGE, false, |label, url| TextSpan::Image {
        alt: label.to_string(),
        url: url.to_string(),
    })
}

fn split_on_pattern<F>(
    spans: Vec<TextSpan>,
    pattern: &Regex,
    skip_after_bang: bool,
    make: F,
) -> Vec<TextSpan>
where
    F: Fn(&str, &str) -> TextSpan,
{
    let mut result = Vec::new();

    for span in spans {
        let text = match span {
            TextSpan::Plain(text) => text,
            styled => {
                result.push(styled);
                continue;
            }
        };

        let mut last = 0;
        for caps in pattern.captures_iter(&text) {
            let (Some(m), Some(label), Some(url)) = (caps.get(0), caps.get(1), caps.get(2))
            else {
                continue;
            };

            // The regex crate has no lookbehind; skipping matches preceded
            // by `!` gives the link pattern its negative-lookbehind
            // semantics. Skipped text stays plain for the image pass.
            if skip_after_bang && m.start() > 0 && text.as_bytes()[m.start() - 1] == b'!' {
                continue;
            }

            if m.start() > last {
                result.push(TextSpan::Plain(text[last..m.start()].to_string()));
            }
            result.push(make(label.as_str(), url.as_str()));
            last = m.end();
        }

        if last == 0 {
            // No match consumed anything; keep the span as it was.
            result.push(TextSpan::Plain(text));
        } else if last < text.len() {
            result.push(TextSpan::Plain(text[last..].to_string()));
        }
    }

    result
}
