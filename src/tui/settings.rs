//! Centralized, hardcoded UI settings for the terminal interface.
//!
//! This is the single place to tweak prompt strings, labels, colors,
//! indentation, and typing-indicator behavior.

use crossterm::style::Color;

// ---------------------------------------------------------------------------
// Layout / indentation
// ---------------------------------------------------------------------------

pub const INDENT_1: &str = "  ";
pub const INDENT_2: &str = "    ";

pub const ORDERED_MARKER_SUFFIX: &str = ". ";
pub const BULLET_MARKER: &str = "• ";

// ---------------------------------------------------------------------------
// Prompt strings / labels
// ---------------------------------------------------------------------------

pub const PROMPT_PRIMARY: &str = "> ";
pub const PROMPT_DELETE_CONFIRM: &str = "delete this conversation? [y/N] ";

pub const WELCOME_GREETING: &str = "Hey I'm Thomas How can I help you today?";
pub const WELCOME_HINT: &str = "type a message, or /help for commands";

pub const LABEL_USER: &str = "you";
pub const LABEL_ASSISTANT: &str = "thomas";
pub const LABEL_ERROR: &str = "error:";
pub const LABEL_TYPING: &str = "thinking";

// ---------------------------------------------------------------------------
// Typing indicator
// ---------------------------------------------------------------------------

pub const TYPING_CLEAR_LINE: &str = "\r\x1b[2K";
pub const TYPING_FRAMES: [char; 4] = ['|', '/', '-', '\\'];
pub const TYPING_TICK_MS: u64 = 100;

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

pub const COLOR_USER_LABEL: Color = Color::Cyan;
pub const COLOR_ASSISTANT_LABEL: Color = Color::Green;
pub const COLOR_ERROR: Color = Color::Red;
pub const COLOR_INFO: Color = Color::DarkGrey;

pub const COLOR_HEADING: Color = Color::Yellow;
pub const COLOR_LIST_MARKER: Color = Color::DarkGrey;
pub const COLOR_INLINE_CODE: Color = Color::DarkYellow;
pub const COLOR_CODE_LANGUAGE: Color = Color::DarkGrey;

pub const COLOR_TYPING_FRAME: Color = Color::Cyan;
pub const COLOR_TYPING_LABEL: Color = Color::DarkGrey;
