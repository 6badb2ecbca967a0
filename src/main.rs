//! main.rs
//! Entry point for mira

pub(crate) mod app;
pub(crate) mod config;
pub(crate) mod core;
pub(crate) mod ui;
pub(crate) mod utils;

pub(crate) use config::Config;

use crate::core::terminal::{self, Launch};
use crate::core::text;
use crate::utils::cli::{CliAction, handle_args};
use std::path::{Path, PathBuf};

fn main() -> std::io::Result<()> {
    std::panic::set_hook(Box::new(|info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let mut stdout = std::io::stdout();
        let _ = crossterm::execute!(
            stdout,
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::cursor::Show
        );

        eprintln!("\n[mira] Error occurred: {}", info);

        #[cfg(debug_assertions)]
        {
            let bt = std::backtrace::Backtrace::force_capture();
            eprintln!("\nStack Backtrace:\n{}", bt);
        }
    }));

    let path_arg = match handle_args() {
        CliAction::Exit => return Ok(()),
        CliAction::View(path) => path,
    };

    let config = Config::load();

    // "-" always means stdin, even when an entry of that name exists.
    let launch = if path_arg != text::STDIN_SOURCE && Path::new(&path_arg).is_dir() {
        Launch::Browse(PathBuf::from(&path_arg))
    } else {
        match text::load_lines(&path_arg) {
            Ok(lines) => Launch::View {
                lines,
                title: path_arg,
            },
            Err(e) => {
                eprintln!("[mira] Error: cannot open '{}': {}", path_arg, e);
                std::process::exit(1);
            }
        }
    };

    // Quit and browser cancellation both exit 0.
    terminal::run_terminal(&config, launch)?;
    Ok(())
}
