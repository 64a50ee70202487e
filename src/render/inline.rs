//! Inline tokenizer: code spans, bold, and italic.
//!
//! Matching is left-to-right and non-overlapping, with a fixed precedence:
//! backtick code spans bind first, then `**bold**`, then `*italic*`. Bold
//! runs before italic so a single-asterisk span can never swallow half of a
//! double-asterisk pair. Delimiters that never find a partner (or would pair
//! across a code-span boundary) stay literal text.

use super::Inline;

/// Tokenize one line of non-code text into inline elements.
pub(super) fn parse(text: &str) -> Vec<Inline> {
    let mut out = Vec::new();
    let mut pos = 0;
    let mut literal_from = 0;

    // Code spans first: `content` with at least one non-backtick character.
    while let Some(rel) = text[pos..].find('`') {
        let open = pos + rel;
        match text[open + 1..].find('`') {
            Some(rel_close) if rel_close > 0 => {
                let close = open + 1 + rel_close;
                emphasis_pass(&text[literal_from..open], &mut out);
                out.push(Inline::Code(text[open + 1..close].to_string()));
                pos = close + 1;
                literal_from = pos;
            }
            // Unmatched or empty span: this backtick stays literal.
            _ => pos = open + 1,
        }
    }
    emphasis_pass(&text[literal_from..], &mut out);
    out
}

/// Extract `**bold**` spans, handing the stretches between them to the
/// italic pass.
fn emphasis_pass(text: &str, out: &mut Vec<Inline>) {
    if text.is_empty() {
        return;
    }
    let mut pos = 0;
    let mut literal_from = 0;

    while let Some(rel) = text[pos..].find("**") {
        let open = pos + rel;
        match bold_close(text, open) {
            Some(close) => {
                italic_pass(&text[literal_from..open], out);
                out.push(Inline::Bold(text[open + 2..close].to_string()));
                pos = close + 2;
                literal_from = pos;
            }
            None => pos = open + 1,
        }
    }
    italic_pass(&text[literal_from..], out);
}

/// Find the `**` closing a bold span opened at `open`.
///
/// Bold content is one or more non-asterisk characters, so the close is the
/// first `*` after the content, and it must be doubled.
fn bold_close(text: &str, open: usize) -> Option<usize> {
    let content_start = open + 2;
    let rel = text[content_start..].find('*')?;
    if rel == 0 {
        return None;
    }
    let star = content_start + rel;
    if text[star..].starts_with("**") {
        Some(star)
    } else {
        None
    }
}

/// Extract `*italic*` spans from text the bold pass left untouched.
fn italic_pass(text: &str, out: &mut Vec<Inline>) {
    if text.is_empty() {
        return;
    }
    let mut pos = 0;
    let mut literal_from = 0;

    while let Some(rel) = text[pos..].find('*') {
        let open = pos + rel;
        match text[open + 1..].find('*') {
            Some(rel_close) if rel_close > 0 => {
                let close = open + 1 + rel_close;
                push_text(&text[literal_from..open], out);
                out.push(Inline::Italic(text[open + 1..close].to_string()));
                pos = close + 1;
                literal_from = pos;
            }
            _ => pos = open + 1,
        }
    }
    push_text(&text[literal_from..], out);
}

/// Append literal text, merging into a preceding text token when possible.
fn push_text(text: &str, out: &mut Vec<Inline>) {
    if text.is_empty() {
        return;
    }
    if let Some(Inline::Text(prev)) = out.last_mut() {
        prev.push_str(text);
    } else {
        out.push(Inline::Text(text.to_string()));
    }
}
