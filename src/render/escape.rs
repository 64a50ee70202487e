//! HTML escaping for literal text.
//!
//! Escaping is applied uniformly to every literal segment at serialization
//! time: code content, paragraph text, heading text, list items, and the
//! language tag placed into a class attribute. A raw `<`, `>`, or `&` from
//! input text must never reach the output.

/// Escape the HTML-significant characters in `text`.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_escaped(&mut out, text);
    out
}

/// Append the escaped form of `text` to an existing buffer.
///
/// The serializer builds output incrementally, so the in-place variant avoids
/// one allocation per text run.
pub fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_significant_characters() {
        assert_eq!(
            escape_html(r#"<script>alert("hi")</script>"#),
            "&lt;script&gt;alert(&quot;hi&quot;)&lt;/script&gt;"
        );
    }

    #[test]
    fn escapes_ampersand_before_other_entities() {
        // "&lt;" in the input must come out double-escaped, not pass through.
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn leaves_plain_text_untouched() {
        assert_eq!(escape_html("plain text, no markup"), "plain text, no markup");
    }

    #[test]
    fn handles_multibyte_text() {
        assert_eq!(escape_html("café <ok>"), "café &lt;ok&gt;");
    }
}
