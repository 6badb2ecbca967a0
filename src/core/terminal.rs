//! Terminal rendering and event loops for mira.
//!
//! Handles setup/teardown of raw mode, alternate screen, redraws,
//! and events (keypress, resize) to app logic. One terminal session
//! covers browsing and viewing, so the screen is entered and restored
//! exactly once.

use crate::app::browser::{BrowseOutcome, BrowserState};
use crate::app::viewer::{KeypressResult, ViewerState};
use crate::config::Config;
use crate::core::text;
use crate::ui;
use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use std::io;
use std::path::PathBuf;

/// What the terminal session starts with: a directory to browse or an
/// already loaded line buffer to view.
pub enum Launch {
    Browse(PathBuf),
    View { lines: Vec<String>, title: String },
}

/// How the session ended. Both are normal exits.
#[derive(Debug, PartialEq)]
pub enum SessionOutcome {
    /// The viewer was quit.
    Quit,
    /// The browser was dismissed without viewing anything.
    Cancelled,
}

/// Initializes the terminal in raw mode and alternate screen and runs the event loop.
///
/// Blocks until quit. Handles all input and UI rendering.
///
/// Returns an std::io::Error if terminal setup or teardown fails, or if
/// a file picked in the browser cannot be loaded.
pub fn run_terminal(config: &Config, launch: Launch) -> io::Result<SessionOutcome> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = event_loop(&mut terminal, config, launch);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, Show)?;
    result
}

/// Runs the session: browse first when launched on a directory, then
/// view the picked file. A loader failure propagates so the terminal
/// teardown in [run_terminal] still runs.
fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    config: &Config,
    launch: Launch,
) -> io::Result<SessionOutcome>
where
    io::Error: From<<B as Backend>::Error>,
{
    let (lines, title) = match launch {
        Launch::View { lines, title } => (lines, title),
        Launch::Browse(start) => {
            let mut browser = BrowserState::new(config, &start);
            match browse_loop(terminal, &mut browser)? {
                BrowseOutcome::Cancelled => return Ok(SessionOutcome::Cancelled),
                BrowseOutcome::Selected(path) => {
                    let lines = text::read_file_lines(&path)?;
                    (lines, path.display().to_string())
                }
            }
        }
    };

    let mut viewer = ViewerState::new(config, lines, title);
    view_loop(terminal, &mut viewer)?;
    Ok(SessionOutcome::Quit)
}

/// Browser loop: relist, draw, block on input. The listing is refreshed
/// every iteration so external changes show up on the next keypress.
fn browse_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    browser: &mut BrowserState,
) -> io::Result<BrowseOutcome>
where
    io::Error: From<<B as Backend>::Error>,
{
    loop {
        browser.refresh_entries();
        terminal.draw(|f| ui::render_browser(f, browser))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(outcome) = browser.handle_keypress(key) {
                    return Ok(outcome);
                }
            }
            // Resize falls through, the top of the loop redraws.
            _ => {}
        }
    }
}

/// Viewer loop: draw, block on input, apply the keypress.
fn view_loop<B: Backend>(terminal: &mut Terminal<B>, viewer: &mut ViewerState) -> io::Result<()>
where
    io::Error: From<<B as Backend>::Error>,
{
    loop {
        terminal.draw(|f| ui::render_viewer(f, viewer))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let KeypressResult::Quit = viewer.handle_keypress(key) {
                    return Ok(());
                }
            }
            _ => {}
        }
    }
}
