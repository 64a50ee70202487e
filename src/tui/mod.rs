//! Terminal user-interface building blocks.
//!
//! This module hosts the transcript renderer, the typing indicator, and
//! syntax highlighting for fenced code blocks. The split keeps output
//! styling, liveness animation, and highlight machinery decoupled.

mod highlight;
pub mod renderer;
pub mod settings;
pub mod typing;

pub use renderer::Renderer;
pub use typing::{set_typing_enabled, start_typing, TypingHandle};
