//! The main config loading module for mira.
//!
//! Handles loading and deserializing settings from `mira.toml`.
//!
//! Provides and manages the main [Config] struct, as well as the internal [RawConfig] used for parsing.
//!
//! Also implements default config initialization when `mira.toml` is not present.

use crate::config::Display;
use crate::config::Theme;
use crate::config::{BrowserKeys, Keys};
use crate::utils::get_home;

use serde::Deserialize;
use std::{fs, io, path::PathBuf};

/// Raw configuration as read from the toml file
/// This struct is deserialized directly from the toml file and then
/// converted into the main [Config] struct.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct RawConfig {
    display: Display,
    theme: Theme,
    keys: Keys,
    browser_keys: BrowserKeys,
}

/// Main configuration struct for mira
/// This struct holds the processed configuration options used by mira.
#[derive(Debug)]
pub struct Config {
    display: Display,
    theme: Theme,
    keys: Keys,
    browser_keys: BrowserKeys,
}

/// Conversion from RawConfig to Config
/// Sanitizes the display values on the way through; everything else is taken as-is.
impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        Self {
            display: raw.display.sanitized(),
            theme: raw.theme,
            keys: raw.keys,
            browser_keys: raw.browser_keys,
        }
    }
}

/// Public methods for loading and accessing the configuration
impl Config {
    /// Load configuration from the default path
    /// If the file does not exist or fails to parse, returns the default configuration.
    ///
    /// Called once from the entry point, before the terminal session starts.
    pub fn load() -> Self {
        let path = Self::default_path();

        if !path.exists() {
            eprintln!(
                "No mira.toml config file found. Using internal defaults. (Tip: run 'mr --init' to generate a config file.)"
            );
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<RawConfig>(&content) {
                Ok(raw) => raw.into(),
                Err(e) => {
                    eprintln!("Error parsing config: {}", e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    // Getters

    #[inline]
    pub fn display(&self) -> &Display {
        &self.display
    }

    #[inline]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    #[inline]
    pub fn keys(&self) -> &Keys {
        &self.keys
    }

    #[inline]
    pub fn browser_keys(&self) -> &BrowserKeys {
        &self.browser_keys
    }

    /// Determine the default configuration file path.
    /// Checks the MIRA_CONFIG environment variable first,
    /// Checks for XDG_CONFIG_HOME after,
    /// then defaults to ~/.config/mira/mira.toml,
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("MIRA_CONFIG") {
            return PathBuf::from(path);
        }

        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("mira/mira.toml");
        }

        if let Some(home) = get_home() {
            return home.join(".config/mira/mira.toml");
        }
        PathBuf::from("mira.toml")
    }

    /// Generate a default configuration file at the specified path.
    /// If the file already exists, returns an error.
    pub fn generate_default(path: &PathBuf, minimal: bool) -> std::io::Result<()> {
        if path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Config file already exists at {:?}", path),
            ));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let full_toml = r##"# mira.toml - default configuration for mira

# Note:
# Commented values are the internal defaults of mira
# Use hex codes (eg. "#RRGGBB") or terminal colors ("cyan")

[display]
# Start with the line number gutter visible
line_numbers = false
# Columns per tab stop when drawing lines
tab_size = 8

[theme]
# A color pair left fully "default" renders inverted instead.

# [theme.selection]
# fg = "default"
# bg = "default"

# [theme.status_line]
# fg = "default"
# bg = "default"

# [keys]
# quit = ["q", "Q", "esc"]
# go_up = ["k", "up"]
# go_down = ["j", "down"]
# scroll_left = ["h", "left"]
# scroll_right = ["l", "right"]
# page_up = ["b", "pageup"]
# page_down = ["space", "pagedown"]
# go_to_top = ["g", "home"]
# go_to_bottom = ["G", "end"]
# toggle_line_numbers = ["n"]
# search_forward = ["/"]
# search_backward = ["?"]
# find_next = ["F"]

# [browser_keys]
# move_up = ["k", "up"]
# move_down = ["j", "down"]
# select = ["enter"]
# go_parent = ["back"]
# quit = ["q", "esc"]

"##;

        let minimal_toml = r##"# mira.toml - minimal configuration
# Only the basic options. The rest uses internal defaults.

[display]
line_numbers = false
tab_size = 8
"##;

        let content = if minimal { minimal_toml } else { full_toml };

        fs::write(path, content)?;
        println!(
            "{} Default config generated at {:?}",
            if minimal { "Minimal" } else { "Full" },
            path
        );
        Ok(())
    }
}

/// Default configuration options
impl Default for Config {
    fn default() -> Self {
        Config {
            display: Display::default(),
            theme: Theme::default(),
            keys: Keys::default(),
            browser_keys: BrowserKeys::default(),
        }
    }
}
