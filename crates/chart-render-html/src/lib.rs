// File: crates/chart-render-html/src/lib.rs
// Summary: Renderer crate; turns chart documents into HTML pages, inline markup or JS.

pub mod browser;
pub mod config;
pub mod html;
pub mod modules;
pub mod templates;
pub mod theme;

pub use browser::{open_in_browser, save_html, show, write_page};
pub use config::RenderConfig;
pub use html::Renderer;
pub use modules::{dependencies, required_modules};
pub use theme::Theme;
