//! Command-line argument parsing and help for mira.
//!
//! mira takes exactly one positional argument: a file to view, a directory
//! to browse, or "-" for standard input. Informational flags print and exit;
//! usage errors go to stderr with exit status 2.

use crate::config::Config;

pub(crate) enum CliAction {
    View(String),
    Exit,
}

pub(crate) fn handle_args() -> CliAction {
    let args: Vec<String> = std::env::args().collect();
    let config_path = Config::default_path();

    if args.len() < 2 {
        eprintln!("Error: missing required path argument.");
        eprintln!("Usage: mr <PATH> or mr [OPTION]");
        std::process::exit(2);
    }

    if args.len() > 2 {
        eprintln!("Error: mira accepts only one argument at a time.");
        eprintln!("Usage: mr <PATH> or mr [OPTION]");
        std::process::exit(2);
    }

    match args[1].as_str() {
        // "-" must win over the flag arms below.
        "-" => CliAction::View(String::from("-")),
        "--version" | "-v" => {
            print_version();
            CliAction::Exit
        }
        "-h" | "--help" => {
            print_help();
            CliAction::Exit
        }
        "--keybinds" | "--keybind" | "--key" => {
            print_keybinds();
            CliAction::Exit
        }
        "--init" => {
            if let Err(e) = Config::generate_default(&config_path, true) {
                eprintln!("Error: {}", e);
            }
            CliAction::Exit
        }
        "--init-full" => {
            if let Err(e) = Config::generate_default(&config_path, false) {
                eprintln!("Error: {}", e);
            }
            CliAction::Exit
        }
        arg if !arg.starts_with('-') && !arg.trim().is_empty() => {
            CliAction::View(arg.to_string())
        }
        arg => {
            eprintln!("Unknown argument: {}", arg);
            eprintln!("Try --help for available options");
            std::process::exit(2);
        }
    }
}

fn print_version() {
    println!("mira {}", env!("CARGO_PKG_VERSION"));
}

fn print_help() {
    println!(
        r#"mira - A minimal terminal pager with a built-in directory browser

USAGE:
  mr <PATH>

PATH:
  File to view, or directory to browse for a file.
  Pass "-" to read from standard input instead.

OPTIONS:
      --init              Generate a minimal default configuration
      --init-full         Generate the full configuration with all options
      --keybinds          Display all the default keybinds
  -h, --help              Print help information
  -v, --version           Display the current installed version of mira

ENVIRONMENT:
  MIRA_CONFIG             Override the default config path
"#
    );
}

const KEYBINDS_TEXT: &str = r##"
=========================
 Key Bindings
=========================
[keys]                      (viewer)
  quit                      ["q", "Q", "esc"]
  go_up                     ["k", "up"]
  go_down                   ["j", "down"]
  scroll_left               ["h", "left"]
  scroll_right              ["l", "right"]
  page_up                   ["b", "pageup"]
  page_down                 ["space", "pagedown"]
  go_to_top                 ["g", "home"]
  go_to_bottom              ["G", "end"]
  toggle_line_numbers       ["n"]
  search_forward            ["/"]
  search_backward           ["?"]
  find_next                 ["F"]

[browser_keys]              (directory browser)
  move_up                   ["k", "up"]
  move_down                 ["j", "down"]
  select                    ["enter"]
  go_parent                 ["back"]
  quit                      ["q", "esc"]

  Syntax Reference:
    Modifiers: <c-x> (Ctrl), <m-x>/<a-x> (Alt/Meta), <s-x> (Shift)
    Standard:  ctrl+x, alt+x, shift+x, meta+x
    Special:   " ", "space", "back", "enter", "esc", "tab",
               "home", "end", "pageup"/"pgup", "pagedown"/"pgdn"

  Note:
    - Shorthand (c-, m-, s-) only works inside brackets <>.
    - Search prompt editing keys (Enter, Esc, arrows, Backspace) are fixed.
"##;

fn print_keybinds() {
    println!("{}", KEYBINDS_TEXT);
}
