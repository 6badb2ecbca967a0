//! Rendering for mira.
//!
//! One render pass per keypress. [render] composes the full frame for either
//! loop from the current state; nothing here mutates state beyond recording
//! the viewport height the viewer needs for paging.

pub mod render;

pub use render::{render_browser, render_viewer};
