//! Directory browser state for mira
//!
//! Tracks the browsed directory, its entry list and the selection.
//! Browsing ends either with a file picked for viewing or with the
//! browser dismissed.

use crate::app::keymap::{BrowserAction, BrowserKeymap};
use crate::config::Config;
use crate::core::dir::{DirEntry, list_entries};
use crossterm::event::KeyEvent;
use std::fs;
use std::path::{Path, PathBuf};

/// How a browsing session ended.
#[derive(Debug, PartialEq)]
pub enum BrowseOutcome {
    /// A file was picked for viewing.
    Selected(PathBuf),
    /// The browser was dismissed without picking anything.
    Cancelled,
}

/// Full state of the directory browser.
pub struct BrowserState<'a> {
    config: &'a Config,
    keymap: BrowserKeymap,
    path: PathBuf,
    entries: Vec<DirEntry>,
    selected: usize,
}

impl<'a> BrowserState<'a> {
    pub fn new(config: &'a Config, start: &Path) -> Self {
        let path = std::path::absolute(start).unwrap_or_else(|_| start.to_path_buf());
        let mut state = BrowserState {
            config,
            keymap: BrowserKeymap::from_config(config),
            path,
            entries: Vec::new(),
            selected: 0,
        };
        state.refresh_entries();
        state
    }

    // Getters / Accessors

    #[inline]
    pub fn config(&self) -> &Config {
        self.config
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub fn entries(&self) -> &[DirEntry] {
        &self.entries
    }

    #[inline]
    pub fn selected_idx(&self) -> usize {
        self.selected
    }

    /// Rebuilds the entry list from the filesystem and clamps the
    /// selection to it. The listing is never empty, the parent entry
    /// is always present.
    pub fn refresh_entries(&mut self) {
        self.entries = list_entries(&self.path);
        let last = self.entries.len() - 1;
        if self.selected > last {
            self.selected = last;
        }
    }

    /// Handles one keypress. Returns the outcome once browsing ends,
    /// [None] while it continues.
    pub fn handle_keypress(&mut self, key: KeyEvent) -> Option<BrowseOutcome> {
        let action = self.keymap.lookup(key)?;
        match action {
            BrowserAction::MoveUp => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            BrowserAction::MoveDown => {
                self.selected = (self.selected + 1).min(self.entries.len() - 1);
                None
            }
            BrowserAction::Select => self.select_entry(),
            BrowserAction::GoParent => {
                self.go_parent();
                None
            }
            BrowserAction::Quit => Some(BrowseOutcome::Cancelled),
        }
    }

    /// Acts on the selected entry: the parent entry and directories
    /// change the browsed path, anything else ends browsing with a
    /// selection. The entry is re-checked on disk at this point, a
    /// vanished directory falls through as a selection and the loader
    /// reports the error.
    fn select_entry(&mut self) -> Option<BrowseOutcome> {
        let entry = self.entries.get(self.selected)?;
        if entry.is_parent() {
            self.go_parent();
            return None;
        }

        let full = self.path.join(entry.name());
        let is_dir = fs::metadata(&full)
            .map(|meta| meta.is_dir())
            .unwrap_or(false);

        if is_dir {
            self.path = full;
            self.selected = 0;
            None
        } else {
            Some(BrowseOutcome::Selected(full))
        }
    }

    /// Moves to the parent directory. The filesystem root is its own
    /// parent, so browsing never escapes it.
    fn go_parent(&mut self) {
        if let Some(parent) = self.path.parent() {
            self.path = parent.to_path_buf();
        }
        self.selected = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, RawConfig};
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::fs::File;
    use tempfile::tempdir;

    fn dummy_config() -> Config {
        Config::from(RawConfig::default())
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn listing_has_parent_first_and_children_sorted() {
        let dir = tempdir().expect("failed to create temp dir");
        File::create(dir.path().join("b.txt")).expect("failed to create file");
        File::create(dir.path().join("a.txt")).expect("failed to create file");
        std::fs::create_dir(dir.path().join("sub")).expect("failed to create subdir");

        let config = dummy_config();
        let state = BrowserState::new(&config, dir.path());

        let labels: Vec<String> = state.entries().iter().map(|e| e.label()).collect();
        assert_eq!(labels, vec!["..", "a.txt", "b.txt", "sub/"]);
        assert_eq!(state.selected_idx(), 0);
    }

    #[test]
    fn selection_clamps_at_list_edges() {
        let dir = tempdir().expect("failed to create temp dir");
        File::create(dir.path().join("only.txt")).expect("failed to create file");

        let config = dummy_config();
        let mut state = BrowserState::new(&config, dir.path());

        state.handle_keypress(press(KeyCode::Up));
        assert_eq!(state.selected_idx(), 0);

        for _ in 0..5 {
            state.handle_keypress(press(KeyCode::Down));
        }
        assert_eq!(state.selected_idx(), 1, "two entries, last index is 1");
    }

    #[test]
    fn refresh_clamps_selection_to_shrunken_listing() {
        let dir = tempdir().expect("failed to create temp dir");
        File::create(dir.path().join("a.txt")).expect("failed to create file");
        File::create(dir.path().join("b.txt")).expect("failed to create file");

        let config = dummy_config();
        let mut state = BrowserState::new(&config, dir.path());
        state.handle_keypress(press(KeyCode::Down));
        state.handle_keypress(press(KeyCode::Down));
        assert_eq!(state.selected_idx(), 2);

        std::fs::remove_file(dir.path().join("a.txt")).expect("failed to remove file");
        std::fs::remove_file(dir.path().join("b.txt")).expect("failed to remove file");
        state.refresh_entries();

        assert_eq!(state.entries().len(), 1);
        assert_eq!(state.selected_idx(), 0);
    }

    #[test]
    fn selecting_a_file_ends_browsing() {
        let dir = tempdir().expect("failed to create temp dir");
        File::create(dir.path().join("pick.txt")).expect("failed to create file");

        let config = dummy_config();
        let mut state = BrowserState::new(&config, dir.path());
        state.handle_keypress(press(KeyCode::Down));

        let outcome = state.handle_keypress(press(KeyCode::Enter));
        match outcome {
            Some(BrowseOutcome::Selected(path)) => {
                assert!(path.ends_with("pick.txt"), "unexpected selection: {path:?}");
            }
            other => panic!("expected a file selection, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn selecting_a_non_utf8_name_returns_the_real_path() {
        use std::os::unix::ffi::OsStrExt;

        let dir = tempdir().expect("failed to create temp dir");
        let raw = std::ffi::OsStr::from_bytes(b"caf\xe9.txt");
        File::create(dir.path().join(raw)).expect("failed to create file");

        let config = dummy_config();
        let mut state = BrowserState::new(&config, dir.path());
        state.handle_keypress(press(KeyCode::Down));

        match state.handle_keypress(press(KeyCode::Enter)) {
            Some(BrowseOutcome::Selected(path)) => {
                assert!(path.exists(), "selection must exist on disk: {path:?}");
                assert_eq!(path.file_name(), Some(raw));
            }
            other => panic!("expected a file selection, got {other:?}"),
        }
    }

    #[test]
    fn selecting_a_directory_descends_into_it() {
        let dir = tempdir().expect("failed to create temp dir");
        std::fs::create_dir(dir.path().join("sub")).expect("failed to create subdir");
        File::create(dir.path().join("sub").join("inner.txt")).expect("failed to create file");

        let config = dummy_config();
        let mut state = BrowserState::new(&config, dir.path());
        state.handle_keypress(press(KeyCode::Down));

        let outcome = state.handle_keypress(press(KeyCode::Enter));
        assert!(outcome.is_none(), "descending must keep the browser open");
        assert!(state.path().ends_with("sub"));
        assert_eq!(state.selected_idx(), 0);
    }

    #[test]
    fn selecting_the_parent_entry_goes_up() {
        let dir = tempdir().expect("failed to create temp dir");
        std::fs::create_dir(dir.path().join("sub")).expect("failed to create subdir");

        let config = dummy_config();
        let mut state = BrowserState::new(&config, &dir.path().join("sub"));

        let outcome = state.handle_keypress(press(KeyCode::Enter));
        assert!(outcome.is_none());
        assert_eq!(state.path(), std::path::absolute(dir.path()).expect("abs"));
        assert_eq!(state.selected_idx(), 0);
    }

    #[test]
    fn backspace_goes_to_parent_and_resets_selection() {
        let dir = tempdir().expect("failed to create temp dir");
        std::fs::create_dir(dir.path().join("sub")).expect("failed to create subdir");

        let config = dummy_config();
        let mut state = BrowserState::new(&config, &dir.path().join("sub"));
        state.refresh_entries();

        let outcome = state.handle_keypress(press(KeyCode::Backspace));
        assert!(outcome.is_none());
        assert!(!state.path().ends_with("sub"));
        assert_eq!(state.selected_idx(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn the_root_is_its_own_parent() {
        let config = dummy_config();
        let mut state = BrowserState::new(&config, Path::new("/"));

        state.handle_keypress(press(KeyCode::Backspace));
        assert_eq!(state.path(), Path::new("/"));
    }

    #[test]
    fn quit_keys_cancel_browsing() {
        let dir = tempdir().expect("failed to create temp dir");
        let config = dummy_config();

        let mut state = BrowserState::new(&config, dir.path());
        assert_eq!(
            state.handle_keypress(press(KeyCode::Char('q'))),
            Some(BrowseOutcome::Cancelled)
        );

        let mut state = BrowserState::new(&config, dir.path());
        assert_eq!(
            state.handle_keypress(press(KeyCode::Esc)),
            Some(BrowseOutcome::Cancelled)
        );
    }

    #[test]
    fn unbound_keys_change_nothing() {
        let dir = tempdir().expect("failed to create temp dir");
        File::create(dir.path().join("x.txt")).expect("failed to create file");

        let config = dummy_config();
        let mut state = BrowserState::new(&config, dir.path());
        state.handle_keypress(press(KeyCode::Down));

        let outcome = state.handle_keypress(press(KeyCode::Char('z')));
        assert!(outcome.is_none());
        assert_eq!(state.selected_idx(), 1);
    }
}
