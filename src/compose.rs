//! Rendering text through a style chain.
//!
//! [`render`] wraps text in the chain's cumulative codes, fixing up any
//! styling already embedded in the text so that outer styles resume after
//! an inner style closes, and closing/re-opening styles around line breaks.

use crate::codes::is_intensity_close;
use crate::level::ColorLevel;
use crate::node::StyleNode;

const ESC: char = '\x1b';

/// Renders `strings` through `chain` at the given capability level.
///
/// The strings are joined with single spaces. Nothing is emitted when the
/// level has no color, the joined text is empty, or there is no chain.
pub fn render<I, S>(chain: Option<&StyleNode>, level: ColorLevel, strings: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parts = strings.into_iter();
    let mut text = match parts.next() {
        Some(first) => first.as_ref().to_string(),
        None => return String::new(),
    };
    for part in parts {
        text.push(' ');
        text.push_str(part.as_ref());
    }

    if !level.has_color() || text.is_empty() {
        return text;
    }

    let Some(chain) = chain else {
        return text;
    };

    if text.contains(ESC) {
        text = reopen_closed_styles(chain, text);
    }

    if text.contains('\n') {
        text = encase_line_breaks(&text, chain.close_all(), chain.open_all());
    }

    format!("{}{}{}", chain.open_all(), text, chain.close_all())
}

/// Replaces each layer's close code with a re-open, innermost layer first.
///
/// Closing bold or dim keeps the close code ahead of the re-open, since the
/// two may be active together.
fn reopen_closed_styles(chain: &StyleNode, mut text: String) -> String {
    for node in chain.ancestors() {
        if node.close().is_empty() || !text.contains(node.close()) {
            continue;
        }
        text = if is_intensity_close(node.close()) {
            text.replace(node.close(), &format!("{}{}", node.close(), node.open()))
        } else {
            text.replace(node.close(), node.open())
        };
    }
    text
}

/// Inserts `prefix` before and `postfix` after every line break.
///
/// A `\r\n` pair counts as one break, with `prefix` placed before the `\r`.
fn encase_line_breaks(text: &str, prefix: &str, postfix: &str) -> String {
    let mut result = String::with_capacity(text.len() + prefix.len() + postfix.len());
    let mut lines = text.split('\n').peekable();
    while let Some(line) = lines.next() {
        if lines.peek().is_none() {
            result.push_str(line);
            break;
        }
        match line.strip_suffix('\r') {
            Some(body) => {
                result.push_str(body);
                result.push_str(prefix);
                result.push_str("\r\n");
            }
            None => {
                result.push_str(line);
                result.push_str(prefix);
                result.push('\n');
            }
        }
        result.push_str(postfix);
    }
    result
}
