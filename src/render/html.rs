//! Safe-HTML serialization of markup fragments.
//!
//! The element shapes mirror what the chat surface expects: `pre/code` with a
//! `language-*` class, `h1`-`h3`, `ol` with `numbered`-tagged items, `ul`,
//! and `p` with `br` line breaks. All literal text passes through
//! [`escape`](super::escape) on the way out.

use super::escape::push_escaped;
use super::{Block, Fragment, Inline};

pub(super) fn serialize(fragment: &Fragment) -> String {
    let mut out = String::new();
    for block in fragment.blocks() {
        write_block(&mut out, block);
    }
    out
}

fn write_block(out: &mut String, block: &Block) {
    match block {
        Block::Paragraph(content) => {
            out.push_str("<p>");
            write_inlines(out, content);
            out.push_str("</p>");
        }
        Block::Heading { level, content } => {
            out.push_str(heading_open(*level));
            write_inlines(out, content);
            out.push_str(heading_close(*level));
        }
        Block::CodeBlock { language, code } => {
            out.push_str("<pre><code class=\"language-");
            push_escaped(out, language);
            out.push_str("\">");
            push_escaped(out, code);
            out.push_str("</code></pre>");
        }
        Block::OrderedList(items) => {
            out.push_str("<ol>");
            for item in items {
                out.push_str("<li class=\"numbered\">");
                write_inlines(out, item);
                out.push_str("</li>");
            }
            out.push_str("</ol>");
        }
        Block::BulletList(items) => {
            out.push_str("<ul>");
            for item in items {
                out.push_str("<li>");
                write_inlines(out, item);
                out.push_str("</li>");
            }
            out.push_str("</ul>");
        }
    }
}

fn write_inlines(out: &mut String, inlines: &[Inline]) {
    for inline in inlines {
        match inline {
            Inline::Text(text) => push_escaped(out, text),
            Inline::Code(code) => {
                out.push_str("<code>");
                push_escaped(out, code);
                out.push_str("</code>");
            }
            Inline::Bold(text) => {
                out.push_str("<strong>");
                push_escaped(out, text);
                out.push_str("</strong>");
            }
            Inline::Italic(text) => {
                out.push_str("<em>");
                push_escaped(out, text);
                out.push_str("</em>");
            }
            Inline::LineBreak => out.push_str("<br>"),
        }
    }
}

fn heading_open(level: u8) -> &'static str {
    match level {
        1 => "<h1>",
        2 => "<h2>",
        _ => "<h3>",
    }
}

fn heading_close(level: u8) -> &'static str {
    match level {
        1 => "</h1>",
        2 => "</h2>",
        _ => "</h3>",
    }
}
