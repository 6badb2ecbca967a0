//! Viewer state and input handling for mira
//!
//! Owns the line buffer, cursor and scroll positions, the line number
//! toggle and the stored search query. Keypresses are resolved through
//! the keymap and mutate this state; the renderer only reads it (and
//! reports the viewport height back through [ViewerState::ensure_visible]).

use crate::app::keymap::{Action, Keymap, NavAction, SystemAction, ViewAction};
use crate::config::Config;
use crate::core::search::{search_backward, search_forward};
use crossterm::event::{KeyCode, KeyEvent};

/// Upper bound for the horizontal scroll offset.
pub const HSCROLL_MAX: usize = 1000;

/// Result of one handled keypress.
#[derive(Debug, PartialEq, Copy, Clone)]
pub enum KeypressResult {
    /// Not handled, key was not bound.
    Continue,
    /// Handled, state may have changed.
    Consumed,
    /// Quit the viewer.
    Quit,
}

/// Input handling mode of the viewer. While a prompt is open, keys
/// edit the input buffer instead of navigating.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionMode {
    Normal,
    Input { mode: InputMode, prompt: String },
}

/// What an open prompt submits to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    SearchForward,
    SearchBackward,
}

/// Full state of the file viewer.
pub struct ViewerState<'a> {
    config: &'a Config,
    keymap: Keymap,
    lines: Vec<String>,
    title: String,
    current: usize,
    top: usize,
    hscroll: usize,
    show_linenums: bool,
    search_query: Option<String>,
    mode: ActionMode,
    input_buffer: String,
    input_cursor_pos: usize,
    viewport_height: usize,
}

impl<'a> ViewerState<'a> {
    pub fn new(config: &'a Config, lines: Vec<String>, title: String) -> Self {
        // The buffer invariant: never empty, even for empty input.
        let lines = if lines.is_empty() {
            vec![String::new()]
        } else {
            lines
        };

        ViewerState {
            config,
            keymap: Keymap::from_config(config),
            lines,
            title,
            current: 0,
            top: 0,
            hscroll: 0,
            show_linenums: config.display().line_numbers(),
            search_query: None,
            mode: ActionMode::Normal,
            input_buffer: String::new(),
            input_cursor_pos: 0,
            viewport_height: 0,
        }
    }

    // Getters / Accessors

    #[inline]
    pub fn config(&self) -> &Config {
        self.config
    }

    #[inline]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn current(&self) -> usize {
        self.current
    }

    #[inline]
    pub fn top(&self) -> usize {
        self.top
    }

    #[inline]
    pub fn hscroll(&self) -> usize {
        self.hscroll
    }

    #[inline]
    pub fn show_linenums(&self) -> bool {
        self.show_linenums
    }

    #[inline]
    pub fn search_query(&self) -> Option<&str> {
        self.search_query.as_deref()
    }

    #[inline]
    pub fn mode(&self) -> &ActionMode {
        &self.mode
    }

    #[inline]
    pub fn input_buffer(&self) -> &str {
        &self.input_buffer
    }

    #[inline]
    pub fn input_cursor_pos(&self) -> usize {
        self.input_cursor_pos
    }

    #[inline]
    pub fn viewport_height(&self) -> usize {
        self.viewport_height
    }

    pub fn is_input_mode(&self) -> bool {
        matches!(self.mode, ActionMode::Input { .. })
    }

    /// Scrolls the viewport so the current line stays visible, and
    /// records the viewport height for the page step. The renderer
    /// calls this once per frame before composing rows.
    pub fn ensure_visible(&mut self, viewport_height: usize) {
        self.viewport_height = viewport_height;
        if viewport_height == 0 {
            return;
        }
        if self.current < self.top {
            self.top = self.current;
        } else if self.current >= self.top + viewport_height {
            self.top = self.current - viewport_height + 1;
        }
    }

    pub fn handle_keypress(&mut self, key: KeyEvent) -> KeypressResult {
        if self.is_input_mode() {
            return self.handle_input_mode(key);
        }

        if let Some(action) = self.keymap.lookup(key) {
            match action {
                Action::Nav(nav) => self.handle_nav_action(nav),
                Action::View(view) => self.handle_view_action(view),
                Action::System(sys) => self.handle_sys_action(sys),
            }
        } else {
            KeypressResult::Continue
        }
    }

    fn handle_nav_action(&mut self, action: NavAction) -> KeypressResult {
        let last = self.total() - 1;
        match action {
            NavAction::CursorUp => self.current = self.current.saturating_sub(1),
            NavAction::CursorDown => self.current = (self.current + 1).min(last),
            NavAction::ScrollLeft => self.hscroll = self.hscroll.saturating_sub(1),
            NavAction::ScrollRight => self.hscroll = (self.hscroll + 1).min(HSCROLL_MAX),
            NavAction::PageUp => self.current = self.current.saturating_sub(self.page_step()),
            NavAction::PageDown => self.current = (self.current + self.page_step()).min(last),
            NavAction::GoToTop => self.current = 0,
            NavAction::GoToBottom => self.current = last,
        }
        KeypressResult::Consumed
    }

    fn handle_view_action(&mut self, action: ViewAction) -> KeypressResult {
        match action {
            ViewAction::ToggleLineNumbers => self.show_linenums = !self.show_linenums,
            ViewAction::SearchForward => {
                self.enter_input_mode(InputMode::SearchForward, "Search: ")
            }
            ViewAction::SearchBackward => {
                self.enter_input_mode(InputMode::SearchBackward, "Search backward: ")
            }
            ViewAction::FindNext => self.find_next(),
        }
        KeypressResult::Consumed
    }

    fn handle_sys_action(&mut self, action: SystemAction) -> KeypressResult {
        match action {
            SystemAction::Quit => KeypressResult::Quit,
        }
    }

    /// One viewport minus a single line of overlap.
    fn page_step(&self) -> usize {
        self.viewport_height.saturating_sub(1)
    }

    // Prompt handling

    fn handle_input_mode(&mut self, key: KeyEvent) -> KeypressResult {
        let mode = match &self.mode {
            ActionMode::Input { mode, .. } => *mode,
            ActionMode::Normal => return KeypressResult::Continue,
        };

        match key.code {
            KeyCode::Enter => {
                self.submit_search(mode);
                self.exit_input_mode();
            }
            KeyCode::Esc => self.exit_input_mode(),
            KeyCode::Left => self.move_input_cursor_left(),
            KeyCode::Right => self.move_input_cursor_right(),
            KeyCode::Home => self.input_cursor_pos = 0,
            KeyCode::End => self.input_cursor_pos = self.input_buffer.len(),
            KeyCode::Backspace => self.input_backspace(),
            KeyCode::Char(c) => self.input_insert(c),
            _ => {}
        }
        KeypressResult::Consumed
    }

    /// Submitting an empty prompt changes nothing. A non-empty query
    /// is stored even when no line matches, so the status line and a
    /// later find-next still see it.
    fn submit_search(&mut self, mode: InputMode) {
        if self.input_buffer.is_empty() {
            return;
        }
        let query = std::mem::take(&mut self.input_buffer);
        let found = match mode {
            InputMode::SearchForward => search_forward(&self.lines, &query, self.current),
            InputMode::SearchBackward => search_backward(&self.lines, &query, self.current),
        };
        self.search_query = Some(query);
        if let Some(idx) = found {
            self.current = idx;
        }
    }

    /// Repeats the stored query forward, starting below the cursor so
    /// the same line is not found again. No stored query, no movement.
    fn find_next(&mut self) {
        if let Some(query) = &self.search_query {
            if let Some(idx) = search_forward(&self.lines, query, self.current + 1) {
                self.current = idx;
            }
        }
    }

    fn enter_input_mode(&mut self, mode: InputMode, prompt: &str) {
        self.mode = ActionMode::Input {
            mode,
            prompt: prompt.to_string(),
        };
        self.input_buffer.clear();
        self.input_cursor_pos = 0;
    }

    fn exit_input_mode(&mut self) {
        self.mode = ActionMode::Normal;
        self.input_buffer.clear();
        self.input_cursor_pos = 0;
    }

    // Input buffer editing, cursor position is a byte offset and must
    // stay on a char boundary.

    fn input_insert(&mut self, ch: char) {
        self.input_buffer.insert(self.input_cursor_pos, ch);
        self.input_cursor_pos += ch.len_utf8();
    }

    fn input_backspace(&mut self) {
        if self.input_cursor_pos == 0 {
            return;
        }
        if let Some((idx, _)) = self.input_buffer[..self.input_cursor_pos]
            .char_indices()
            .next_back()
        {
            self.input_buffer.remove(idx);
            self.input_cursor_pos = idx;
        }
    }

    fn move_input_cursor_left(&mut self) {
        if let Some((idx, _)) = self.input_buffer[..self.input_cursor_pos]
            .char_indices()
            .next_back()
        {
            self.input_cursor_pos = idx;
        }
    }

    fn move_input_cursor_right(&mut self) {
        if let Some(ch) = self.input_buffer[self.input_cursor_pos..].chars().next() {
            self.input_cursor_pos += ch.len_utf8();
        }
    }
}
