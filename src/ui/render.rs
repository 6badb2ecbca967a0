//! UI renderer implementation.
//!
//! Contains the `render_viewer` and `render_browser` entry points used by the
//! terminal loops: body rows on top, one status row at the bottom.
//!
//! This module should stay mostly “pure rendering”: it reads state + config and
//! produces widgets, without owning mira core logic. Row and status composition
//! are plain string helpers so they can be tested without a terminal.

use crate::app::browser::BrowserState;
use crate::app::viewer::{ActionMode, ViewerState};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Renders the file viewer on each frame: the visible slice of the line
/// buffer with the current line highlighted, and the status or prompt
/// row below it.
pub fn render_viewer(frame: &mut Frame, state: &mut ViewerState) {
    let (body, status) = split_frame(frame.area());
    state.ensure_visible(body.height as usize);

    let theme = state.config().theme();
    let selection_style = theme.selection_style();
    let status_style = theme.status_line_style();
    let tab_size = state.config().display().tab_size();

    let mut rows: Vec<Line> = Vec::with_capacity(body.height as usize);
    for row in 0..body.height as usize {
        let idx = state.top() + row;
        if idx >= state.total() {
            break;
        }
        let text = compose_row(
            &state.lines()[idx],
            idx,
            state.hscroll(),
            state.show_linenums(),
            tab_size,
        );
        let style = if idx == state.current() {
            selection_style
        } else {
            Style::default()
        };
        rows.push(Line::from(Span::styled(text, style)));
    }
    frame.render_widget(Paragraph::new(rows), body);

    match state.mode() {
        ActionMode::Input { prompt, .. } => {
            render_prompt(
                frame,
                status,
                prompt,
                state.input_buffer(),
                state.input_cursor_pos(),
                status_style,
            );
        }
        ActionMode::Normal => {
            let text = status_line(state);
            frame.render_widget(Paragraph::new(text).style(status_style), status);
        }
    }
}

/// Renders the directory browser on each frame: as many entries as fit
/// above the status row, the selected one highlighted.
pub fn render_browser(frame: &mut Frame, state: &BrowserState) {
    let (body, status) = split_frame(frame.area());
    let theme = state.config().theme();
    let selection_style = theme.selection_style();

    let mut rows: Vec<Line> = Vec::with_capacity(body.height as usize);
    for (idx, entry) in state
        .entries()
        .iter()
        .take(body.height as usize)
        .enumerate()
    {
        let style = if idx == state.selected_idx() {
            selection_style
        } else {
            Style::default()
        };
        rows.push(Line::from(Span::styled(entry.label(), style)));
    }
    frame.render_widget(Paragraph::new(rows), body);

    let text = format!("Browse: {}", state.path().display());
    frame.render_widget(
        Paragraph::new(text).style(theme.status_line_style()),
        status,
    );
}

/// Splits the frame into the body area and the single status row.
fn split_frame(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Composes one body row: the optional line number gutter, then the
/// line content shifted left by the horizontal scroll. Tabs expand
/// against the row's column, other control characters are blanked so
/// they cannot disturb the layout.
fn compose_row(line: &str, idx: usize, hscroll: usize, gutter: bool, tab_size: usize) -> String {
    let mut row = if gutter {
        format!("{:>6} ", idx + 1)
    } else {
        String::new()
    };

    let tab = tab_size.max(1);
    let mut col = row.len();
    for ch in line.chars().skip(hscroll) {
        if ch == '\t' {
            let pad = tab - (col % tab);
            for _ in 0..pad {
                row.push(' ');
            }
            col += pad;
        } else if ch.is_control() {
            row.push(' ');
            col += 1;
        } else {
            row.push(ch);
            col += ch.width().unwrap_or(0);
        }
    }
    row
}

/// Status line text: file name, cursor position, plus the search and
/// line number indicators when they apply.
fn status_line(state: &ViewerState) -> String {
    let mut status = format!(
        "File: {} | Line {}/{}",
        state.title(),
        state.current() + 1,
        state.total()
    );
    if let Some(query) = state.search_query() {
        status.push_str(&format!(" | Search: {}", query));
    }
    if state.show_linenums() {
        status.push_str(" | LineNums: ON");
    }
    status
}

/// Draws the prompt row and places the terminal cursor inside it.
fn render_prompt(
    frame: &mut Frame,
    area: Rect,
    prompt: &str,
    buffer: &str,
    cursor_pos: usize,
    style: Style,
) {
    let prompt_width = prompt.width();
    let visible_width = (area.width as usize).saturating_sub(prompt_width);
    let (visible, cursor_offset) = input_field_view(buffer, cursor_pos, visible_width);

    let text = format!("{}{}", prompt, visible);
    frame.render_widget(Paragraph::new(text).style(style), area);

    let max_x = (area.width as usize).saturating_sub(1);
    let cursor_x = area.x + (prompt_width + cursor_offset).min(max_x) as u16;
    frame.set_cursor_position((cursor_x, area.y));
}

/// Helper function to calculate cursor offset for cursor moving
/// Handles horizontal truncation, variable width with unicode_width and clamps cursor to buffer.
fn input_field_view(input_text: &str, cursor_pos: usize, visible_width: usize) -> (&str, usize) {
    let cursor_pos = cursor_pos.min(input_text.len());
    let input_width = input_text.width();
    if input_width <= visible_width {
        let cursor_offset = input_text[..cursor_pos].width();
        (input_text, cursor_offset)
    } else {
        let mut current_w = 0;
        let mut start = input_text.len();
        for (idx, ch) in input_text.char_indices().rev() {
            current_w += ch.width().unwrap_or(0);
            if current_w > visible_width {
                start = idx + ch.len_utf8();
                break;
            }
        }

        let cursor_offset = if cursor_pos < start {
            0
        } else {
            input_text[start..cursor_pos].width()
        };

        (&input_text[start..], cursor_offset)
    }
}

/// render integration tests
#[cfg(test)]
mod tests {
    use super::*;

    use crate::Config;
    use crate::config::RawConfig;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn dummy_config() -> Config {
        Config::from(RawConfig::default())
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn gutter_right_aligns_one_based_numbers() {
        assert_eq!(compose_row("hello", 0, 0, true, 8), "     1 hello");
        assert_eq!(compose_row("hello", 99, 0, true, 8), "   100 hello");
        assert_eq!(compose_row("hello", 0, 0, false, 8), "hello");
    }

    #[test]
    fn hscroll_drops_leading_chars_not_bytes() {
        assert_eq!(compose_row("héllo", 0, 1, false, 8), "éllo");
        assert_eq!(compose_row("abc", 0, 2, false, 8), "c");
        assert_eq!(compose_row("abc", 0, 10, false, 8), "");
    }

    #[test]
    fn tabs_expand_to_the_next_stop() {
        assert_eq!(compose_row("a\tb", 0, 0, false, 8), "a       b");
        assert_eq!(compose_row("\tx", 0, 0, false, 4), "    x");
        // With the gutter the content starts at column 7, one short of
        // the first stop.
        assert_eq!(compose_row("\tx", 0, 0, true, 8), "     1  x");
        // Scrolling slices characters first; the surviving tab expands
        // from column 0 of what is left.
        assert_eq!(compose_row("a\tb", 0, 1, false, 8), "        b");
    }

    #[test]
    fn control_chars_are_blanked() {
        assert_eq!(compose_row("a\x07b", 0, 0, false, 8), "a b");
        assert_eq!(compose_row("a\x1b[31m", 0, 0, false, 8), "a [31m");
    }

    #[test]
    fn status_line_shows_position_and_indicators() {
        let config = dummy_config();
        let lines: Vec<String> = vec!["a".into(), "b".into(), "c".into()];
        let mut state = ViewerState::new(&config, lines, "notes.txt".into());
        assert_eq!(status_line(&state), "File: notes.txt | Line 1/3");

        state.handle_keypress(press(KeyCode::Char('/')));
        state.handle_keypress(press(KeyCode::Char('b')));
        state.handle_keypress(press(KeyCode::Enter));
        assert_eq!(
            status_line(&state),
            "File: notes.txt | Line 2/3 | Search: b"
        );

        state.handle_keypress(press(KeyCode::Char('n')));
        assert_eq!(
            status_line(&state),
            "File: notes.txt | Line 2/3 | Search: b | LineNums: ON"
        );
    }

    #[test]
    fn split_frame_reserves_one_status_row() {
        let area = Rect::new(0, 0, 80, 24);
        let (body, status) = split_frame(area);
        assert_eq!(body.height, 23);
        assert_eq!(status.height, 1);
        assert_eq!(status.y, 23);
    }

    #[test]
    fn input_view_windows_long_input_around_the_cursor() {
        let input = "abcdefghij";
        let (visible, offset) = input_field_view(input, input.len(), 4);
        assert_eq!(visible, "ghij");
        assert_eq!(offset, 4);

        let (visible, offset) = input_field_view(input, 2, 40);
        assert_eq!(visible, input);
        assert_eq!(offset, 2);
    }
}
