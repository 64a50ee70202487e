//! Lightweight syntax highlighting for fenced code blocks.
//!
//! Chat replies only carry short snippets, so highlighting stays eager and
//! line-oriented rather than streaming.

use std::sync::OnceLock;

use syntect::easy::HighlightLines;
use syntect::highlighting::{FontStyle, Theme, ThemeSet};
use syntect::parsing::SyntaxSet;

/// A highlighted text fragment with display attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledToken {
    /// Source text fragment for this style span.
    pub text: String,
    /// RGB foreground color to apply.
    pub rgb: (u8, u8, u8),
    /// Bold attribute flag.
    pub bold: bool,
    /// Italic attribute flag.
    pub italic: bool,
    /// Underline attribute flag.
    pub underline: bool,
}

static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
static THEME_SET: OnceLock<ThemeSet> = OnceLock::new();

fn syntax_set() -> &'static SyntaxSet {
    SYNTAX_SET.get_or_init(SyntaxSet::load_defaults_newlines)
}

fn theme_set() -> &'static ThemeSet {
    THEME_SET.get_or_init(ThemeSet::load_defaults)
}

/// Pick a deterministic preferred theme with a stable fallback.
fn preferred_theme(theme_set: &ThemeSet) -> Option<&Theme> {
    theme_set
        .themes
        .get("base16-ocean.dark")
        .or_else(|| theme_set.themes.values().next())
}

/// Highlight code lines for a fence language token such as `rust` or `js`.
///
/// Returns `None` when the language is unknown (including the `plaintext`
/// default) or when highlighting fails, so callers can fall back to plain
/// output.
pub fn highlight_code_lines(language: &str, lines: &[&str]) -> Option<Vec<Vec<StyledToken>>> {
    if lines.is_empty() {
        return Some(Vec::new());
    }

    let syntaxes = syntax_set();
    let syntax = syntaxes.find_syntax_by_token(language)?;
    if syntax.name == "Plain Text" {
        return None;
    }

    let theme = preferred_theme(theme_set())?;
    let mut highlighter = HighlightLines::new(syntax, theme);
    let mut highlighted = Vec::with_capacity(lines.len());

    for line in lines {
        let ranges = highlighter.highlight_line(line, syntaxes).ok()?;
        let mut tokens = Vec::with_capacity(ranges.len());
        for (style, fragment) in ranges {
            if fragment.is_empty() {
                continue;
            }
            tokens.push(StyledToken {
                text: fragment.to_string(),
                rgb: (style.foreground.r, style.foreground.g, style.foreground.b),
                bold: style.font_style.contains(FontStyle::BOLD),
                italic: style.font_style.contains(FontStyle::ITALIC),
                underline: style.font_style.contains(FontStyle::UNDERLINE),
            });
        }
        highlighted.push(tokens);
    }

    Some(highlighted)
}
