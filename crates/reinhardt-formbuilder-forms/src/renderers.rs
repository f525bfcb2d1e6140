//! Built-in renderers

pub mod basic;

pub use basic::{BasicRenderer, attribute_text, html_escape, render_attributes};
