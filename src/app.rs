//! Application state for mira.
//!
//! This module contains the two interactive state machines and their key
//! dispatch tables:
//! - [browser]: the directory-browse loop state (see [BrowserState], [BrowseOutcome]).
//! - [viewer]: the pager loop state (see [ViewerState], [KeypressResult]).
//! - [keymap]: config-driven key-to-action tables shared by both loops.
//!
//! Both states hold the loaded [crate::config::Config] by reference and are
//! driven one keypress at a time by [crate::core::terminal].

pub mod browser;
pub mod keymap;
pub mod viewer;

pub use browser::{BrowseOutcome, BrowserState};
pub use viewer::{ActionMode, InputMode, KeypressResult, ViewerState};
