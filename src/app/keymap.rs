//! Key mapping and action dispatch system for mira
//!
//! Defines key to an action, parsing from the config, and enum variants
//! for all navigation, view and system actions used by mira. The viewer
//! and the directory browser carry separate maps.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Represents any action in the viewer: navigation, view, or system.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Action {
    Nav(NavAction),
    View(ViewAction),
    System(SystemAction),
}

/// Navigation actions (cursor movement, paging, horizontal scroll)
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum NavAction {
    CursorUp,
    CursorDown,
    ScrollLeft,
    ScrollRight,
    PageUp,
    PageDown,
    GoToTop,
    GoToBottom,
}

/// View actions (toggles and search)
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum ViewAction {
    ToggleLineNumbers,
    SearchForward,
    SearchBackward,
    FindNext,
}

/// System actions (quit)
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum SystemAction {
    Quit,
}

/// Actions available in the directory browser.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum BrowserAction {
    MoveUp,
    MoveDown,
    Select,
    GoParent,
    Quit,
}

/// Key + modifiers as used in keybind/keymap
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub(crate) struct Key {
    pub(crate) code: KeyCode,
    pub(crate) modifiers: KeyModifiers,
}

/// Stores the mapping from Key to viewer action, built from the config
pub(crate) struct Keymap {
    map: HashMap<Key, Action>,
}

impl Keymap {
    /// Builds the viewer keymap from the config
    #[rustfmt::skip]
    pub(crate) fn from_config(config: &crate::config::Config) -> Self {
        let mut map = HashMap::new();
        let keys = config.keys();

        macro_rules! bind {
            ($keys:expr, $action:expr) => {
                bind($keys, $action, &mut map);
            };
        }

        use NavAction as N;
        use SystemAction as S;
        use ViewAction as V;

        // NavActions
        bind!(keys.go_up(),               Action::Nav(N::CursorUp));
        bind!(keys.go_down(),             Action::Nav(N::CursorDown));
        bind!(keys.scroll_left(),         Action::Nav(N::ScrollLeft));
        bind!(keys.scroll_right(),        Action::Nav(N::ScrollRight));
        bind!(keys.page_up(),             Action::Nav(N::PageUp));
        bind!(keys.page_down(),           Action::Nav(N::PageDown));
        bind!(keys.go_to_top(),           Action::Nav(N::GoToTop));
        bind!(keys.go_to_bottom(),        Action::Nav(N::GoToBottom));

        // ViewActions
        bind!(keys.toggle_line_numbers(), Action::View(V::ToggleLineNumbers));
        bind!(keys.search_forward(),      Action::View(V::SearchForward));
        bind!(keys.search_backward(),     Action::View(V::SearchBackward));
        bind!(keys.find_next(),           Action::View(V::FindNext));

        // SystemActions
        bind!(keys.quit(),                Action::System(S::Quit));

        Keymap { map }
    }

    /// Looks up the action for a given key event
    pub(crate) fn lookup(&self, key: KeyEvent) -> Option<Action> {
        lookup_in(&self.map, key)
    }
}

/// Stores the mapping from Key to browser action, built from the config
pub(crate) struct BrowserKeymap {
    map: HashMap<Key, BrowserAction>,
}

impl BrowserKeymap {
    /// Builds the browser keymap from the config
    #[rustfmt::skip]
    pub(crate) fn from_config(config: &crate::config::Config) -> Self {
        let mut map = HashMap::new();
        let keys = config.browser_keys();

        macro_rules! bind {
            ($keys:expr, $action:expr) => {
                bind($keys, $action, &mut map);
            };
        }

        use BrowserAction as B;

        bind!(keys.move_up(),   B::MoveUp);
        bind!(keys.move_down(), B::MoveDown);
        bind!(keys.select(),    B::Select);
        bind!(keys.go_parent(), B::GoParent);
        bind!(keys.quit(),      B::Quit);

        BrowserKeymap { map }
    }

    /// Looks up the browser action for a given key event
    pub(crate) fn lookup(&self, key: KeyEvent) -> Option<BrowserAction> {
        lookup_in(&self.map, key)
    }
}

fn lookup_in<A: Copy>(map: &HashMap<Key, A>, key: KeyEvent) -> Option<A> {
    let k = Key {
        code: key.code,
        modifiers: key.modifiers,
    };

    if let Some(action) = map.get(&k).copied() {
        return Some(action);
    }

    if matches!(key.code, KeyCode::Char(_)) && key.modifiers.contains(KeyModifiers::SHIFT) {
        let k2 = Key {
            code: key.code,
            modifiers: key.modifiers - KeyModifiers::SHIFT,
        };
        return map.get(&k2).copied();
    }
    None
}

fn parse_key(s: &str) -> Option<Key> {
    let mut modifiers = KeyModifiers::NONE;
    let mut code: Option<KeyCode> = None;

    let is_bracketed = s.starts_with('<') && s.ends_with('>');
    let mut input = s.trim_start_matches('<').trim_end_matches('>').to_string();

    if is_bracketed && input.contains('-') {
        let parts: Vec<&str> = input.split('-').collect();

        for &prefix in parts.iter().take(parts.len().saturating_sub(1)) {
            match prefix.to_lowercase().as_str() {
                "c" | "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "a" | "m" | "alt" => modifiers |= KeyModifiers::ALT,
                "s" | "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }
        input = parts.last()?.to_string();
    }

    let normalized = input.replace('-', "+");
    for part in normalized.split('+') {
        let p_low = part.to_lowercase();
        match p_low.as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "alt" | "meta" => modifiers |= KeyModifiers::ALT,
            "shift" => modifiers |= KeyModifiers::SHIFT,

            "up" => code = Some(KeyCode::Up),
            "down" => code = Some(KeyCode::Down),
            "left" => code = Some(KeyCode::Left),
            "right" => code = Some(KeyCode::Right),
            "enter" => code = Some(KeyCode::Enter),
            "esc" => code = Some(KeyCode::Esc),
            "backspace" | "back" => code = Some(KeyCode::Backspace),
            "tab" => code = Some(KeyCode::Tab),
            "space" | "spc" => code = Some(KeyCode::Char(' ')),
            "home" => code = Some(KeyCode::Home),
            "end" => code = Some(KeyCode::End),
            "pageup" | "pgup" => code = Some(KeyCode::PageUp),
            "pagedown" | "pgdn" => code = Some(KeyCode::PageDown),

            _ => {
                if part.len() == 1 {
                    let mut c = part.chars().next()?;
                    if modifiers.contains(KeyModifiers::SHIFT) {
                        c = c.to_ascii_uppercase();
                    }
                    code = Some(KeyCode::Char(c));
                } else if p_low.starts_with('f')
                    && p_low.len() > 1
                    && p_low[1..].chars().all(|c| c.is_ascii_digit())
                {
                    let n = p_low[1..].parse().ok()?;
                    code = Some(KeyCode::F(n));
                } else if part.is_empty() {
                    continue;
                } else {
                    return None;
                }
            }
        }
    }

    Some(Key {
        code: code?,
        modifiers,
    })
}

fn bind<A: Copy>(key_list: &[String], action: A, map: &mut HashMap<Key, A>) {
    for k in key_list {
        if let Some(key) = parse_key(k) {
            map.insert(key, action);
        }
    }
}
