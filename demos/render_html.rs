//! Minimal demo rendering chat text to HTML markup.
//!
//! Run with:
//!   cargo run --example render_html -- "**bold** and `code`"

use thomas::render::render;

fn main() -> Result<(), String> {
    let text = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if text.trim().is_empty() {
        return Err("usage: cargo run --example render_html -- \"<text>\"".to_string());
    }

    println!("{}", render(&text).to_html());
    Ok(())
}
