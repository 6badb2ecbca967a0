//! Theme configuration options for mira
//!
//! This module defines the theme configuration options which are read from the mira.toml
//! configuration file. The viewer only styles two things: the current
//! line (selection) and the status line.

use crate::utils::parse_color;

use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

/// Theme configuration options
/// # Examples
/// ```toml
/// [theme.selection]
/// fg = "black"
/// bg = "cyan"
/// [theme.status_line]
/// bg = "#3c3836"
/// ```
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct Theme {
    selection: ColorPair,
    status_line: ColorPair,
}

impl Theme {
    pub fn selection_style(&self) -> Style {
        self.selection.style_or_reversed()
    }

    pub fn status_line_style(&self) -> Style {
        self.status_line.style_or_reversed()
    }
}

/// ColorPair struct to hold foreground and background colors.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ColorPair {
    #[serde(default, deserialize_with = "deserialize_color_field")]
    fg: Color,
    #[serde(default, deserialize_with = "deserialize_color_field")]
    bg: Color,
}

/// Default implementation for ColorPair
/// Sets both foreground and background to Color::Reset
impl Default for ColorPair {
    fn default() -> Self {
        Self {
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

impl ColorPair {
    /// Converts the pair to a [Style]. A pair left fully unset renders
    /// inverted instead, which reads on any terminal background.
    pub fn style_or_reversed(&self) -> Style {
        if self.fg == Color::Reset && self.bg == Color::Reset {
            return Style::default().add_modifier(Modifier::REVERSED);
        }
        Style::default().fg(self.fg).bg(self.bg)
    }
}

// Helper function to deserialize Theme colors
fn deserialize_color_field<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(parse_color(&s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_pairs_render_reversed() {
        let theme = Theme::default();
        let style = theme.selection_style();
        assert!(style.add_modifier.contains(Modifier::REVERSED));
        assert_eq!(style.fg, None);
    }

    #[test]
    fn configured_pairs_render_their_colors() {
        let theme: Theme = toml::from_str(
            r#"
            [selection]
            fg = "black"
            bg = "cyan"
            "#,
        )
        .expect("theme toml should parse");

        let style = theme.selection_style();
        assert_eq!(style.fg, Some(Color::Black));
        assert_eq!(style.bg, Some(Color::Cyan));
        assert!(!style.add_modifier.contains(Modifier::REVERSED));

        // The untouched pair keeps the inverted default.
        let status = theme.status_line_style();
        assert!(status.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn half_set_pairs_do_not_invert() {
        // The hex value embeds `"#`, which would close a one-hash raw string.
        let theme: Theme = toml::from_str(
            r##"
            [status_line]
            bg = "#3c3836"
            "##,
        )
        .expect("theme toml should parse");

        let style = theme.status_line_style();
        assert_eq!(style.bg, Some(Color::Rgb(0x3c, 0x38, 0x36)));
        assert!(!style.add_modifier.contains(Modifier::REVERSED));
    }
}
