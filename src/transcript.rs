//! The ordered message list behind the chat surface.
//!
//! `Transcript` is an injected rendering context: callers hand it raw text
//! and it renders, appends, and keeps the view pinned to the newest entry.
//! Nothing here touches a global display tree; the terminal layer asks the
//! transcript what is visible and draws that.

use crate::render::{render, Fragment};

/// One rendered message in the transcript.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Original message text as received.
    pub raw: String,
    /// True for messages authored by the end user.
    pub is_user: bool,
    /// Rendered markup for display.
    pub markup: Fragment,
}

/// Ordered message list with scroll state and a typing indicator flag.
#[derive(Debug, Default)]
pub struct Transcript {
    entries: Vec<Entry>,
    /// How far the view is scrolled back from the newest entry.
    scroll_from_bottom: usize,
    /// Whether a request is outstanding and the typing indicator shows.
    typing: bool,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render `text` and append it as the newest entry.
    ///
    /// Appending always snaps the view back to the newest entry, matching the
    /// chat surface's scroll-to-bottom-on-message behavior.
    pub fn push(&mut self, text: impl Into<String>, is_user: bool) -> &Entry {
        let raw = text.into();
        let markup = render(&raw);
        self.entries.push(Entry {
            raw,
            is_user,
            markup,
        });
        self.scroll_from_bottom = 0;
        self.entries.last().expect("entry was just pushed")
    }

    /// All entries in submission order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the transcript shows the welcome/empty state.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries and reset view state (new-conversation behavior).
    pub fn clear(&mut self) {
        self.entries.clear();
        self.scroll_from_bottom = 0;
        self.typing = false;
    }

    /// Mark a request as outstanding; also snaps the view to the newest
    /// entry so the indicator is in sight.
    pub fn show_typing(&mut self) {
        self.typing = true;
        self.scroll_from_bottom = 0;
    }

    /// Clear the typing indicator (on completion or failure).
    pub fn hide_typing(&mut self) {
        self.typing = false;
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }

    /// Scroll the view back toward older entries.
    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_from_bottom = self
            .scroll_from_bottom
            .saturating_add(lines)
            .min(self.entries.len());
    }

    /// Scroll the view toward the newest entry.
    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_from_bottom = self.scroll_from_bottom.saturating_sub(lines);
    }

    /// The window of entries currently in view for a display `height`
    /// entries tall. An offset past the top clamps to the oldest window.
    pub fn visible(&self, height: usize) -> &[Entry] {
        let len = self.entries.len();
        let offset = self.scroll_from_bottom.min(len.saturating_sub(height));
        let end = len - offset;
        let start = end.saturating_sub(height);
        &self.entries[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_renders_and_appends() {
        let mut transcript = Transcript::new();
        assert!(transcript.is_empty());

        let entry = transcript.push("**hi**", true);
        assert!(entry.is_user);
        assert_eq!(entry.markup.to_html(), "<p><strong>hi</strong></p>");
        assert_eq!(transcript.len(), 1);
    }

    #[test]
    fn entries_keep_submission_order() {
        let mut transcript = Transcript::new();
        transcript.push("first", true);
        transcript.push("second", false);
        let raws: Vec<&str> = transcript.entries().iter().map(|e| e.raw.as_str()).collect();
        assert_eq!(raws, vec!["first", "second"]);
    }

    // The view must follow the newest entry whenever one is appended.
    #[test]
    fn push_scrolls_to_newest() {
        let mut transcript = Transcript::new();
        for i in 0..10 {
            transcript.push(format!("m{i}"), false);
        }
        transcript.scroll_up(5);
        assert_eq!(transcript.visible(3).last().unwrap().raw, "m4");

        transcript.push("m10", true);
        assert_eq!(transcript.visible(3).last().unwrap().raw, "m10");
    }

    #[test]
    fn visible_clamps_at_oldest_window() {
        let mut transcript = Transcript::new();
        for i in 0..5 {
            transcript.push(format!("m{i}"), false);
        }
        transcript.scroll_up(100);
        let window = transcript.visible(2);
        assert_eq!(window[0].raw, "m0");
        assert_eq!(window.len(), 2);
    }

    #[test]
    fn visible_handles_short_transcripts() {
        let mut transcript = Transcript::new();
        transcript.push("only", true);
        assert_eq!(transcript.visible(10).len(), 1);
        assert!(Transcript::new().visible(10).is_empty());
    }

    #[test]
    fn typing_flag_toggles_and_scrolls() {
        let mut transcript = Transcript::new();
        for i in 0..10 {
            transcript.push(format!("m{i}"), false);
        }
        transcript.scroll_up(5);
        transcript.show_typing();
        assert!(transcript.is_typing());
        assert_eq!(transcript.visible(3).last().unwrap().raw, "m9");

        transcript.hide_typing();
        assert!(!transcript.is_typing());
    }

    #[test]
    fn clear_resets_to_empty_state() {
        let mut transcript = Transcript::new();
        transcript.push("hello", true);
        transcript.show_typing();
        transcript.clear();
        assert!(transcript.is_empty());
        assert!(!transcript.is_typing());
    }

    #[test]
    fn scroll_down_moves_toward_newest() {
        let mut transcript = Transcript::new();
        for i in 0..6 {
            transcript.push(format!("m{i}"), false);
        }
        transcript.scroll_up(3);
        transcript.scroll_down(2);
        assert_eq!(transcript.visible(2).last().unwrap().raw, "m4");
    }
}
