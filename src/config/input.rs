//! Input configuration options for mira
//!
//! This module defines the input configuration options which are read from the mira.toml
//! configuration file. The viewer and the directory browser have separate key tables.

use serde::Deserialize;

/// Input configuration options of all viewer actions
#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Keys {
    quit: Vec<String>,
    go_up: Vec<String>,
    go_down: Vec<String>,
    scroll_left: Vec<String>,
    scroll_right: Vec<String>,
    page_up: Vec<String>,
    page_down: Vec<String>,
    go_to_top: Vec<String>,
    go_to_bottom: Vec<String>,
    toggle_line_numbers: Vec<String>,
    search_forward: Vec<String>,
    search_backward: Vec<String>,
    find_next: Vec<String>,
}

/// Input configuration options of all browser actions
#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct BrowserKeys {
    move_up: Vec<String>,
    move_down: Vec<String>,
    select: Vec<String>,
    go_parent: Vec<String>,
    quit: Vec<String>,
}

macro_rules! accessor {
    ($type:ident: $($name:ident),+ $(,)?) => {
        impl $type {
            $(
                #[inline]
                pub fn $name(&self) -> &[String] {
                    &self.$name
                }
            )+
        }
    };
}

accessor!(
    Keys:
    quit,
    go_up,
    go_down,
    scroll_left,
    scroll_right,
    page_up,
    page_down,
    go_to_top,
    go_to_bottom,
    toggle_line_numbers,
    search_forward,
    search_backward,
    find_next,
);

accessor!(
    BrowserKeys:
    move_up,
    move_down,
    select,
    go_parent,
    quit,
);

/// Default viewer key bindings
impl Default for Keys {
    fn default() -> Self {
        Keys {
            quit: vec!["q".into(), "Q".into(), "Esc".into()],

            go_up: vec!["k".into(), "Up".into()],
            go_down: vec!["j".into(), "Down".into()],
            scroll_left: vec!["h".into(), "Left".into()],
            scroll_right: vec!["l".into(), "Right".into()],

            page_up: vec!["b".into(), "PageUp".into()],
            page_down: vec!["Space".into(), "PageDown".into()],

            go_to_top: vec!["g".into(), "Home".into()],
            go_to_bottom: vec!["G".into(), "End".into()],

            toggle_line_numbers: vec!["n".into()],
            search_forward: vec!["/".into()],
            search_backward: vec!["?".into()],
            find_next: vec!["F".into()],
        }
    }
}

/// Default browser key bindings
impl Default for BrowserKeys {
    fn default() -> Self {
        BrowserKeys {
            move_up: vec!["k".into(), "Up".into()],
            move_down: vec!["j".into(), "Down".into()],
            select: vec!["Enter".into()],
            go_parent: vec!["Backspace".into()],
            quit: vec!["q".into(), "Esc".into()],
        }
    }
}
