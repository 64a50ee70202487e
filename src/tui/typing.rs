//! Typing indicator shown while a request is in flight.
//!
//! The indicator animates on stderr so it never mixes with transcript
//! output on stdout, and disappears cleanly once the reply lands.

use crate::tui::settings;
use crossterm::style::Stylize;
use std::io::{self, IsTerminal, Write};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::thread;
use std::time::Duration;

static TYPING_ENABLED: AtomicBool = AtomicBool::new(true);

/// RAII handle for an active typing indicator.
pub struct TypingHandle {
    /// Stop signal shared with the animation thread.
    stop: Arc<AtomicBool>,
    /// Background writer thread, present only when the indicator is live.
    thread: Option<thread::JoinHandle<()>>,
}

impl TypingHandle {
    /// Construct a no-op handle used when indicator output is disabled.
    pub(crate) fn disabled() -> Self {
        Self {
            stop: Arc::new(AtomicBool::new(true)),
            thread: None,
        }
    }

    /// Stop and clean up the animation thread.
    pub fn finish(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

impl Drop for TypingHandle {
    fn drop(&mut self) {
        self.finish();
    }
}

/// Globally enable/disable the typing indicator.
pub fn set_typing_enabled(enabled: bool) {
    TYPING_ENABLED.store(enabled, Ordering::Relaxed);
}

/// Start the typing indicator on stderr.
pub fn start_typing(color: bool) -> TypingHandle {
    if !TYPING_ENABLED.load(Ordering::Relaxed) {
        return TypingHandle::disabled();
    }
    if !io::stderr().is_terminal() {
        return TypingHandle::disabled();
    }

    let stop = Arc::new(AtomicBool::new(false));
    let stop_flag = Arc::clone(&stop);

    let thread = thread::spawn(move || {
        let mut idx = 0usize;

        while !stop_flag.load(Ordering::Relaxed) {
            let line = typing_line(
                settings::TYPING_FRAMES[idx % settings::TYPING_FRAMES.len()],
                color,
            );
            let mut err = io::stderr();
            let _ = write!(err, "{line}");
            let _ = err.flush();
            idx += 1;
            thread::sleep(Duration::from_millis(settings::TYPING_TICK_MS));
        }

        clear_typing_line();
    });

    TypingHandle {
        stop,
        thread: Some(thread),
    }
}

fn typing_line(frame: char, color: bool) -> String {
    if color {
        format!(
            "{}{} {}",
            settings::TYPING_CLEAR_LINE,
            format!("[{frame}]").with(settings::COLOR_TYPING_FRAME),
            settings::LABEL_TYPING.with(settings::COLOR_TYPING_LABEL),
        )
    } else {
        format!(
            "{}[{frame}] {}",
            settings::TYPING_CLEAR_LINE,
            settings::LABEL_TYPING
        )
    }
}

fn clear_typing_line() {
    let mut err = io::stderr();
    let _ = write!(err, "{}", settings::TYPING_CLEAR_LINE);
    let _ = err.flush();
}
