//! Thomas — a terminal chat client for the Thomas backend.
//!
//! This crate provides an interactive chat loop over a small HTTP API:
//! messages go out to `/chat`, replies come back with a conversation id,
//! and responses are rendered from a lightweight markdown dialect into
//! either HTML markup or styled terminal output.
//!
//! # Quick start
//!
//! ```no_run
//! use thomas::api::ApiClient;
//! use thomas::app::App;
//! use thomas::config::load_config;
//! use thomas::tui::Renderer;
//!
//! # async fn example() {
//! let config = load_config(None).unwrap();
//! let client = ApiClient::new(&config.server);
//! let mut app = App::new(client, Renderer::new(true));
//! app.send("Hello!").await;
//! # }
//! ```

pub mod api;
pub mod app;
pub mod build_info;
pub mod config;
pub mod error;
pub mod render;
pub mod transcript;
pub mod tui;
pub mod types;
