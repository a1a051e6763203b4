//! Ordered inline substitutions for span-level formatting.
//!
//! Applied to heading, list-item and paragraph text; never to code
//! bodies. Order matters: code spans first so backticked text is already
//! wrapped before the bold and link rules run over it.

use std::sync::LazyLock;

use regex::Regex;

/// Inline code span: text between single backticks.
static CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());

/// Bold: text between double asterisks, within one line.
static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());

/// Link: `[label](url)`.
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Apply the inline rules in fixed order.
///
/// Unmatched markers pass through unchanged; no escaping is performed.
#[must_use]
pub(crate) fn apply(text: &str) -> String {
    let text = CODE_RE.replace_all(text, "<code>${1}</code>");
    let text = BOLD_RE.replace_all(&text, "<strong>${1}</strong>");
    let text = LINK_RE.replace_all(&text, "<a href=\"${2}\">${1}</a>");
    text.into_owned()
}
