//! Display configuration options for mira
//!
//! This module defines the display configuration options which are read from the mira.toml
//! configuration file.

use serde::Deserialize;

/// Smallest accepted tab stop width.
const MIN_TAB_SIZE: usize = 1;
/// Largest accepted tab stop width.
const MAX_TAB_SIZE: usize = 16;

/// Display configuration options
///
/// Holds the options related to how lines are drawn in the viewer:
/// whether the line number gutter starts visible and how wide a tab
/// stop is. Defaults keep the viewer usable without any config file.
#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Display {
    line_numbers: bool,
    tab_size: usize,
}

/// Public methods for accessing display configuration options
impl Display {
    #[inline]
    pub fn line_numbers(&self) -> bool {
        self.line_numbers
    }

    #[inline]
    pub fn tab_size(&self) -> usize {
        self.tab_size
    }

    /// Clamps out-of-range values once at load time so the renderer
    /// can rely on them.
    pub(crate) fn sanitized(self) -> Self {
        let tab_size = self.tab_size.clamp(MIN_TAB_SIZE, MAX_TAB_SIZE);
        if tab_size != self.tab_size {
            eprintln!(
                "Warning: display.tab_size {} is out of range ({}..={}), using {}",
                self.tab_size, MIN_TAB_SIZE, MAX_TAB_SIZE, tab_size
            );
        }
        Display {
            tab_size,
            ..self
        }
    }
}

/// Default display configuration options
impl Default for Display {
    fn default() -> Self {
        Display {
            line_numbers: false,
            tab_size: 8,
        }
    }
}
