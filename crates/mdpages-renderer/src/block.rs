//! Line-oriented block lexer.
//!
//! Produces a flat block list; no nesting. Fence delimiters are checked
//! before heading and list markers so that `#` or `- ` lines inside code
//! blocks stay part of the code body.

/// A lexed block of the source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// ATX heading, levels 1-3.
    Heading { level: u8, text: String },
    /// Fenced code block. The tag is whatever followed the opening
    /// backticks (may be empty); the body is verbatim source text.
    CodeFence { tag: String, body: String },
    /// A contiguous run of `- ` list items.
    ListRun { items: Vec<String> },
    /// Plain text between blank lines.
    Paragraph { text: String },
}

/// Lex markdown text into a flat block list.
///
/// Total over all input: unrecognized lines accumulate into paragraphs
/// and an unclosed fence runs to end of input.
#[must_use]
pub fn lex(input: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();
    let mut items: Vec<String> = Vec::new();

    let mut lines = input.lines();
    while let Some(line) = lines.next() {
        if let Some(tag) = line.strip_prefix("```") {
            flush_paragraph(&mut blocks, &mut paragraph);
            flush_items(&mut blocks, &mut items);
            let mut body: Vec<&str> = Vec::new();
            for body_line in lines.by_ref() {
                if body_line == "```" {
                    break;
                }
                body.push(body_line);
            }
            blocks.push(Block::CodeFence {
                tag: tag.to_owned(),
                body: body.join("\n"),
            });
        } else if let Some((level, text)) = heading(line) {
            flush_paragraph(&mut blocks, &mut paragraph);
            flush_items(&mut blocks, &mut items);
            blocks.push(Block::Heading {
                level,
                text: text.to_owned(),
            });
        } else if let Some(item) = line.strip_prefix("- ") {
            flush_paragraph(&mut blocks, &mut paragraph);
            items.push(item.to_owned());
        } else if line.is_empty() {
            flush_paragraph(&mut blocks, &mut paragraph);
            flush_items(&mut blocks, &mut items);
        } else {
            flush_items(&mut blocks, &mut items);
            paragraph.push(line);
        }
    }

    flush_paragraph(&mut blocks, &mut paragraph);
    flush_items(&mut blocks, &mut items);
    blocks
}

/// Match an ATX heading marker, longest first so `###` is never
/// swallowed by the level-1 rule. The marker must be followed by a space.
fn heading(line: &str) -> Option<(u8, &str)> {
    line.strip_prefix("### ")
        .map(|rest| (3, rest))
        .or_else(|| line.strip_prefix("## ").map(|rest| (2, rest)))
        .or_else(|| line.strip_prefix("# ").map(|rest| (1, rest)))
}

fn flush_paragraph(blocks: &mut Vec<Block>, paragraph: &mut Vec<&str>) {
    if !paragraph.is_empty() {
        blocks.push(Block::Paragraph {
            text: paragraph.join("\n"),
        });
        paragraph.clear();
    }
}

fn flush_items(blocks: &mut Vec<Block>, items: &mut Vec<String>) {
    if !items.is_empty() {
        blocks.push(Block::ListRun {
            items: std::mem::take(items),
        });
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{Block, lex};

    fn paragraph(text: &str) -> Block {
        Block::Paragraph {
            text: text.to_owned(),
        }
    }

    #[test]
    fn lex_heading_levels_longest_marker_first() {
        assert_eq!(
            lex("### deep"),
            vec![Block::Heading {
                level: 3,
                text: "deep".to_owned()
            }]
        );
        assert_eq!(
            lex("## mid"),
            vec![Block::Heading {
                level: 2,
                text: "mid".to_owned()
            }]
        );
        assert_eq!(
            lex("# top"),
            vec![Block::Heading {
                level: 1,
                text: "top".to_owned()
            }]
        );
    }

    #[test]
    fn lex_heading_requires_space_after_marker() {
        assert_eq!(lex("#nospace"), vec![paragraph("#nospace")]);
    }

    #[test]
    fn lex_four_hashes_is_not_a_heading() {
        assert_eq!(lex("#### too deep"), vec![paragraph("#### too deep")]);
    }

    #[test]
    fn lex_fence_with_tag() {
        assert_eq!(
            lex("```rust\nfn main() {}\n```"),
            vec![Block::CodeFence {
                tag: "rust".to_owned(),
                body: "fn main() {}".to_owned()
            }]
        );
    }

    #[test]
    fn lex_fence_without_tag_has_empty_tag() {
        assert_eq!(
            lex("```\nx\n```"),
            vec![Block::CodeFence {
                tag: String::new(),
                body: "x".to_owned()
            }]
        );
    }

    #[test]
    fn lex_fence_body_keeps_heading_and_list_lines() {
        let blocks = lex("```\n# not a heading\n- not an item\n```");
        assert_eq!(
            blocks,
            vec![Block::CodeFence {
                tag: String::new(),
                body: "# not a heading\n- not an item".to_owned()
            }]
        );
    }

    #[test]
    fn lex_unclosed_fence_runs_to_end_of_input() {
        assert_eq!(
            lex("```sh\necho hi"),
            vec![Block::CodeFence {
                tag: "sh".to_owned(),
                body: "echo hi".to_owned()
            }]
        );
    }

    #[test]
    fn lex_contiguous_items_form_one_run() {
        assert_eq!(
            lex("- a\n- b\n- c"),
            vec![Block::ListRun {
                items: vec!["a".to_owned(), "b".to_owned(), "c".to_owned()]
            }]
        );
    }

    #[test]
    fn lex_blank_line_splits_list_runs() {
        assert_eq!(
            lex("- a\n\n- b"),
            vec![
                Block::ListRun {
                    items: vec!["a".to_owned()]
                },
                Block::ListRun {
                    items: vec!["b".to_owned()]
                },
            ]
        );
    }

    #[test]
    fn lex_paragraph_spans_adjacent_lines() {
        assert_eq!(lex("one\ntwo\n\nthree"), vec![
            paragraph("one\ntwo"),
            paragraph("three"),
        ]);
    }

    #[test]
    fn lex_plain_line_ends_list_run() {
        assert_eq!(lex("- a\nafter"), vec![
            Block::ListRun {
                items: vec!["a".to_owned()]
            },
            paragraph("after"),
        ]);
    }

    #[test]
    fn lex_heading_ends_paragraph() {
        assert_eq!(lex("text\n# head"), vec![
            paragraph("text"),
            Block::Heading {
                level: 1,
                text: "head".to_owned()
            },
        ]);
    }
}
