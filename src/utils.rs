//! Miscellaneous utility functions for mira.
//!
//! Holds the [cli] argument parser and the [helpers] submodule with small
//! utilities (color parsing, home directory lookup) used across the crate.

pub mod cli;
pub mod helpers;

pub use helpers::{get_home, parse_color};
