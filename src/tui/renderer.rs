//! Terminal output renderer for transcript entries and status messages.

use crate::build_info;
use crate::render::{Block, Fragment, Inline};
use crate::transcript::Entry;
use crate::tui::highlight::{highlight_code_lines, StyledToken};
use crate::tui::settings;
use crossterm::style::Stylize;

/// Renders transcript entries and status lines to stdout.
///
/// Holds only the color flag; all layout decisions live in [`settings`].
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn color_enabled(&self) -> bool {
        self.color
    }

    /// Print the startup banner with build metadata.
    pub fn banner(&self) {
        if self.color {
            println!(
                "{} {}",
                settings::LABEL_ASSISTANT
                    .bold()
                    .with(settings::COLOR_ASSISTANT_LABEL),
                build_info::startup_metadata_line().with(settings::COLOR_INFO)
            );
        } else {
            println!(
                "{} {}",
                settings::LABEL_ASSISTANT,
                build_info::startup_metadata_line()
            );
        }
    }

    /// Print the empty-transcript greeting followed by a usage hint.
    pub fn welcome(&self) {
        if self.color {
            println!(
                "{}",
                settings::WELCOME_GREETING.with(settings::COLOR_ASSISTANT_LABEL)
            );
        } else {
            println!("{}", settings::WELCOME_GREETING);
        }
        self.info(settings::WELCOME_HINT);
    }

    /// Print an informational line in muted styling.
    pub fn info(&self, text: &str) {
        if self.color {
            println!("{}", text.with(settings::COLOR_INFO));
        } else {
            println!("{text}");
        }
    }

    /// Print an error line.
    pub fn error(&self, text: &str) {
        if self.color {
            eprintln!(
                "{} {}",
                settings::LABEL_ERROR.with(settings::COLOR_ERROR),
                text
            );
        } else {
            eprintln!("{} {text}", settings::LABEL_ERROR);
        }
    }

    /// Print one transcript entry: a speaker label followed by the rendered
    /// message body.
    pub fn entry(&self, entry: &Entry) {
        let (label, label_color) = if entry.is_user {
            (settings::LABEL_USER, settings::COLOR_USER_LABEL)
        } else {
            (settings::LABEL_ASSISTANT, settings::COLOR_ASSISTANT_LABEL)
        };
        if self.color {
            println!("{}", label.bold().with(label_color));
        } else {
            println!("{label}");
        }
        self.fragment(&entry.markup);
        println!();
    }

    /// Print a rendered fragment block by block.
    pub fn fragment(&self, fragment: &Fragment) {
        for block in fragment.blocks() {
            match block {
                Block::Paragraph(inlines) => {
                    for line in self.inline_lines(inlines) {
                        println!("{}{line}", settings::INDENT_1);
                    }
                }
                Block::Heading { content, .. } => {
                    let text = self.inline_lines(content).join(" ");
                    if self.color {
                        println!(
                            "{}{}",
                            settings::INDENT_1,
                            text.bold().with(settings::COLOR_HEADING)
                        );
                    } else {
                        println!("{}{text}", settings::INDENT_1);
                    }
                }
                Block::CodeBlock { language, code } => self.code_block(language, code),
                Block::OrderedList(items) => {
                    for (index, item) in items.iter().enumerate() {
                        let marker =
                            format!("{}{}", index + 1, settings::ORDERED_MARKER_SUFFIX);
                        self.list_item(&marker, item);
                    }
                }
                Block::BulletList(items) => {
                    for item in items {
                        self.list_item(settings::BULLET_MARKER, item);
                    }
                }
            }
        }
    }

    fn list_item(&self, marker: &str, item: &[Inline]) {
        let text = self.inline_lines(item).join(" ");
        if self.color {
            println!(
                "{}{}{text}",
                settings::INDENT_1,
                marker.with(settings::COLOR_LIST_MARKER)
            );
        } else {
            println!("{}{marker}{text}", settings::INDENT_1);
        }
    }

    fn code_block(&self, language: &str, code: &str) {
        if self.color {
            println!(
                "{}{}",
                settings::INDENT_1,
                language.with(settings::COLOR_CODE_LANGUAGE)
            );
        } else {
            println!("{}{language}", settings::INDENT_1);
        }

        let lines: Vec<&str> = code.lines().collect();
        let highlighted = if self.color {
            highlight_code_lines(language, &lines)
        } else {
            None
        };
        match highlighted {
            Some(rows) => {
                for row in &rows {
                    println!("{}{}", settings::INDENT_2, styled_row(row));
                }
            }
            None => {
                for line in &lines {
                    println!("{}{line}", settings::INDENT_2);
                }
            }
        }
    }

    /// Flatten inline tokens into display lines, splitting on line breaks.
    fn inline_lines(&self, inlines: &[Inline]) -> Vec<String> {
        let mut lines = vec![String::new()];
        for inline in inlines {
            match inline {
                Inline::Text(text) => push_current(&mut lines, text),
                Inline::Code(code) => {
                    let styled = if self.color {
                        code.as_str().with(settings::COLOR_INLINE_CODE).to_string()
                    } else {
                        format!("`{code}`")
                    };
                    push_current(&mut lines, &styled);
                }
                Inline::Bold(text) => {
                    let styled = if self.color {
                        text.as_str().bold().to_string()
                    } else {
                        text.clone()
                    };
                    push_current(&mut lines, &styled);
                }
                Inline::Italic(text) => {
                    let styled = if self.color {
                        text.as_str().italic().to_string()
                    } else {
                        text.clone()
                    };
                    push_current(&mut lines, &styled);
                }
                Inline::LineBreak => lines.push(String::new()),
            }
        }
        lines
    }
}

fn push_current(lines: &mut Vec<String>, text: &str) {
    if let Some(last) = lines.last_mut() {
        last.push_str(text);
    }
}

fn styled_row(row: &[StyledToken]) -> String {
    let mut out = String::new();
    for token in row {
        let (r, g, b) = token.rgb;
        let mut styled = token
            .text
            .as_str()
            .with(crossterm::style::Color::Rgb { r, g, b });
        if token.bold {
            styled = styled.bold();
        }
        if token.italic {
            styled = styled.italic();
        }
        if token.underline {
            styled = styled.underlined();
        }
        out.push_str(&styled.to_string());
    }
    out
}
