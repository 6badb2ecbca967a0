//! Core runtime logic for mira.
//!
//! This module contains the non-UI “engine” pieces used by the application:
//! - [text]: loading a file or stdin into an in-memory line buffer (see [load_lines]).
//! - [search]: case-insensitive substring search over the line buffer.
//! - [dir]: directory listing for the browser (see [list_entries], [DirEntry]).
//! - [terminal]: terminal setup/teardown and the crossterm/ratatui event loops.

pub mod dir;
pub mod search;
pub mod terminal;
pub mod text;

pub use dir::{DirEntry, PARENT_ENTRY, list_entries};
pub use search::{search_backward, search_forward};
pub use terminal::{Launch, SessionOutcome, run_terminal};
pub use text::{STDIN_SOURCE, load_lines, read_file_lines};
