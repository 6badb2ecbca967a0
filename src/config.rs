//! Configuration for mira (`mira.toml`).
//!
//! Layout mirrors the config file sections:
//! - [load]: locating, parsing and defaulting the file (see [Config], [RawConfig]).
//! - [display]: `[display]` table (line numbers, tab width).
//! - [theme]: `[theme]` color tables for the selection bar and status line.
//! - [input]: `[keys]` and `[browser_keys]` binding lists.

pub mod display;
pub mod input;
pub mod load;
pub mod theme;

pub use display::Display;
pub use input::{BrowserKeys, Keys};
pub use load::{Config, RawConfig};
pub use theme::Theme;
