//! Block tokenizer: fenced code, headings, lists, and paragraphs.
//!
//! Fenced code blocks are carved out of the raw message first, since their
//! content is opaque to every other rule. The remaining text is grouped line
//! by line: heading markers (longest first), numbered-list lines, bullet
//! lines, blank-line paragraph breaks. Consecutive list lines coalesce into a
//! single list container; a blank line or any other line ends the run.

use super::inline;
use super::{Block, Inline};

/// Language tag applied to fences with no language word.
const DEFAULT_LANGUAGE: &str = "plaintext";

/// Tokenize a whole message into block elements.
pub(super) fn parse(text: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut pos = 0;
    let mut literal_from = 0;

    while let Some(rel) = text[pos..].find("```") {
        let fence = pos + rel;
        match parse_fence(text, fence) {
            Some(parsed) => {
                parse_text_lines(&text[literal_from..fence], &mut blocks);
                blocks.push(Block::CodeBlock {
                    language: parsed.language,
                    code: parsed.code,
                });
                pos = parsed.resume;
                literal_from = parsed.resume;
            }
            // Not a well-formed fence at this offset. Step one byte so an
            // overlapping candidate (extra leading backtick) still opens.
            None => pos = fence + 1,
        }
    }
    parse_text_lines(&text[literal_from..], &mut blocks);
    blocks
}

struct ParsedFence {
    language: String,
    code: String,
    resume: usize,
}

/// Parse a fenced block opening at byte offset `fence`.
///
/// The opener is three backticks, an optional language word, and a newline;
/// the block runs to the next three backticks. Anything else (no newline
/// after the language word, or no closing fence) is rejected so the text
/// renders literally.
fn parse_fence(text: &str, fence: usize) -> Option<ParsedFence> {
    let after = fence + 3;
    let rest = &text[after..];
    let lang_len = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(rest.len());
    if !rest[lang_len..].starts_with('\n') {
        return None;
    }

    let body_start = after + lang_len + 1;
    let close = body_start + text[body_start..].find("```")?;
    let language = if lang_len == 0 {
        DEFAULT_LANGUAGE.to_string()
    } else {
        rest[..lang_len].to_string()
    };
    Some(ParsedFence {
        language,
        code: text[body_start..close].trim().to_string(),
        resume: close + 3,
    })
}

/// Group non-code text into headings, lists, and paragraphs.
fn parse_text_lines(text: &str, blocks: &mut Vec<Block>) {
    if text.is_empty() {
        return;
    }

    let mut paragraph: Vec<Inline> = Vec::new();
    let mut numbered: Vec<Vec<Inline>> = Vec::new();
    let mut bullets: Vec<Vec<Inline>> = Vec::new();

    for line in text.split('\n') {
        if line.is_empty() {
            flush_paragraph(&mut paragraph, blocks);
            flush_numbered(&mut numbered, blocks);
            flush_bullets(&mut bullets, blocks);
            continue;
        }
        if let Some((level, content)) = heading_line(line) {
            flush_paragraph(&mut paragraph, blocks);
            flush_numbered(&mut numbered, blocks);
            flush_bullets(&mut bullets, blocks);
            blocks.push(Block::Heading {
                level,
                content: inline::parse(content),
            });
            continue;
        }
        if let Some(item) = numbered_item(line) {
            flush_paragraph(&mut paragraph, blocks);
            flush_bullets(&mut bullets, blocks);
            numbered.push(inline::parse(item));
            continue;
        }
        if let Some(item) = bullet_item(line) {
            flush_paragraph(&mut paragraph, blocks);
            flush_numbered(&mut numbered, blocks);
            bullets.push(inline::parse(item));
            continue;
        }

        flush_numbered(&mut numbered, blocks);
        flush_bullets(&mut bullets, blocks);
        if !paragraph.is_empty() {
            paragraph.push(Inline::LineBreak);
        }
        paragraph.extend(inline::parse(line));
    }

    flush_paragraph(&mut paragraph, blocks);
    flush_numbered(&mut numbered, blocks);
    flush_bullets(&mut bullets, blocks);
}

fn flush_paragraph(paragraph: &mut Vec<Inline>, blocks: &mut Vec<Block>) {
    if !paragraph.is_empty() {
        blocks.push(Block::Paragraph(std::mem::take(paragraph)));
    }
}

fn flush_numbered(items: &mut Vec<Vec<Inline>>, blocks: &mut Vec<Block>) {
    if !items.is_empty() {
        blocks.push(Block::OrderedList(std::mem::take(items)));
    }
}

fn flush_bullets(items: &mut Vec<Vec<Inline>>, blocks: &mut Vec<Block>) {
    if !items.is_empty() {
        blocks.push(Block::BulletList(std::mem::take(items)));
    }
}

/// Match a heading marker, longest first so `###` never reads as `#`.
fn heading_line(line: &str) -> Option<(u8, &str)> {
    for (marker, level) in [("### ", 3u8), ("## ", 2), ("# ", 1)] {
        if let Some(content) = line.strip_prefix(marker) {
            return Some((level, content));
        }
    }
    None
}

/// Match a `digits. ` numbered-list line and return the item text.
fn numbered_item(line: &str) -> Option<&str> {
    let digits = line
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(line.len());
    if digits == 0 {
        return None;
    }
    let rest = line[digits..].strip_prefix('.')?;
    let item = rest.trim_start();
    if item.len() == rest.len() {
        // A dot with no following whitespace is ordinary text ("3.14").
        return None;
    }
    Some(item)
}

/// Match a `• ` or `- ` bullet line and return the item text.
fn bullet_item(line: &str) -> Option<&str> {
    let rest = line
        .strip_prefix('•')
        .or_else(|| line.strip_prefix('-'))?;
    let item = rest.trim_start();
    if item.len() == rest.len() {
        return None;
    }
    Some(item)
}
