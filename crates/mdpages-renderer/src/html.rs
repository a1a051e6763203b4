//! HTML rendering of the lexed block list.

use std::fmt::Write;

use crate::block::Block;
use crate::inline;

/// Render blocks to an HTML fragment, joined with blank lines.
#[must_use]
pub(crate) fn render(blocks: &[Block]) -> String {
    let rendered: Vec<String> = blocks.iter().map(render_block).collect();
    rendered.join("\n\n")
}

fn render_block(block: &Block) -> String {
    match block {
        Block::Heading { level, text } => {
            format!("<h{level}>{}</h{level}>", inline::apply(text))
        }
        // Body verbatim: no escaping, no inline rules. An untagged fence
        // keeps an empty language suffix.
        Block::CodeFence { tag, body } => {
            format!("<pre><code class=\"language-{tag}\">{body}</code></pre>")
        }
        Block::ListRun { items } => {
            let mut out = String::from("<ul>");
            for item in items {
                let _ = write!(out, "<li>{}</li>", inline::apply(item));
            }
            out.push_str("</ul>");
            out
        }
        Block::Paragraph { text } => {
            let text = inline::apply(text.trim());
            // A block already starting with an HTML tag is left bare.
            if text.is_empty() || text.starts_with('<') {
                text
            } else {
                format!("<p>{text}</p>")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::render;
    use crate::block::Block;

    #[test]
    fn render_heading_applies_inline_formatting() {
        let blocks = vec![Block::Heading {
            level: 2,
            text: "Run `make`".to_owned(),
        }];
        assert_eq!(render(&blocks), "<h2>Run <code>make</code></h2>");
    }

    #[test]
    fn render_untagged_fence_keeps_empty_language_class() {
        let blocks = vec![Block::CodeFence {
            tag: String::new(),
            body: "x".to_owned(),
        }];
        assert_eq!(
            render(&blocks),
            "<pre><code class=\"language-\">x</code></pre>"
        );
    }

    #[test]
    fn render_fence_body_is_not_inline_formatted() {
        let blocks = vec![Block::CodeFence {
            tag: "md".to_owned(),
            body: "**not bold** `not code`".to_owned(),
        }];
        let html = render(&blocks);
        assert!(html.contains("**not bold** `not code`"));
    }

    #[test]
    fn render_list_run_joins_items_without_separator() {
        let blocks = vec![Block::ListRun {
            items: vec!["a".to_owned(), "b".to_owned()],
        }];
        assert_eq!(render(&blocks), "<ul><li>a</li><li>b</li></ul>");
    }

    #[test]
    fn render_list_items_get_inline_formatting() {
        let blocks = vec![Block::ListRun {
            items: vec!["**bold** item".to_owned()],
        }];
        assert_eq!(
            render(&blocks),
            "<ul><li><strong>bold</strong> item</li></ul>"
        );
    }

    #[test]
    fn render_paragraph_starting_with_tag_is_not_wrapped() {
        let blocks = vec![Block::Paragraph {
            text: "<img src=\"x.png\">".to_owned(),
        }];
        assert_eq!(render(&blocks), "<img src=\"x.png\">");
    }

    #[test]
    fn render_paragraph_starting_with_code_span_is_not_wrapped() {
        // The starts-with-tag check runs after substitution, so a leading
        // code span suppresses the paragraph wrapper.
        let blocks = vec![Block::Paragraph {
            text: "`x` marks the spot".to_owned(),
        }];
        assert_eq!(render(&blocks), "<code>x</code> marks the spot");
    }

    #[test]
    fn render_joins_blocks_with_blank_lines() {
        let blocks = vec![
            Block::Heading {
                level: 1,
                text: "T".to_owned(),
            },
            Block::Paragraph {
                text: "p".to_owned(),
            },
        ];
        assert_eq!(render(&blocks), "<h1>T</h1>\n\n<p>p</p>");
    }
}
