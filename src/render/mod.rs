//! Message renderer: chat text to a display-safe markup fragment.
//!
//! Assistant replies use a lightweight markdown-like syntax: fenced code
//! blocks, inline code, `#`/`##`/`###` headings, `**bold**`, `*italic*`,
//! numbered and `•`/`-` bullet lists. [`render`] tokenizes that syntax into a
//! [`Fragment`] tree in two explicit passes with a fixed precedence order:
//!
//! blocks: fenced code > heading (longest marker first) > numbered list >
//! bullet list > blank-line paragraph break > paragraph text;
//! inlines: code span > bold > italic, left-to-right, non-overlapping.
//!
//! Rendering is total: malformed or unterminated tokens are left as literal
//! text, never an error. Every literal segment is HTML-escaped on
//! serialization, inside and outside code blocks, so the output can be
//! inserted into a display surface without further sanitization.

mod block;
pub mod escape;
mod html;
mod inline;

/// A block-level markup element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Running text; single newlines inside it are [`Inline::LineBreak`]s.
    Paragraph(Vec<Inline>),
    /// `#`/`##`/`###` heading, level 1-3.
    Heading { level: u8, content: Vec<Inline> },
    /// Fenced code block with its language tag ("plaintext" when untagged).
    /// Content is verbatim, trimmed of surrounding whitespace.
    CodeBlock { language: String, code: String },
    /// Coalesced run of consecutive numbered-list lines.
    OrderedList(Vec<Vec<Inline>>),
    /// Coalesced run of consecutive bullet lines.
    BulletList(Vec<Vec<Inline>>),
}

/// An inline markup element within a paragraph, heading, or list item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    /// Literal text (escaped at serialization time).
    Text(String),
    /// Backtick code span; content is verbatim.
    Code(String),
    /// `**bold**` span.
    Bold(String),
    /// `*italic*` span.
    Italic(String),
    /// Single-newline break inside a paragraph.
    LineBreak,
}

/// A rendered message: an ordered tree of display-safe markup elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    blocks: Vec<Block>,
}

impl Fragment {
    /// Block elements in document order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// True when the source text rendered to nothing.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Serialize to a safe HTML string.
    ///
    /// All literal text is escaped here; the result never contains an
    /// unescaped `<`, `>`, or `&` originating from the source text.
    pub fn to_html(&self) -> String {
        html::serialize(self)
    }
}

/// Render raw message text into a markup fragment.
///
/// Total over all inputs; there is no error path.
pub fn render(text: &str) -> Fragment {
    Fragment {
        blocks: block::parse(text),
    }
}
