//! Line buffer loading for mira
//!
//! Reads a file or standard input as raw bytes, decodes the bytes as
//! UTF-8 with lossy replacement and splits the result into the line
//! buffer the viewer works on. The buffer is never empty: an empty
//! input still produces a single empty line.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Path argument that selects standard input instead of a file.
pub const STDIN_SOURCE: &str = "-";

/// Loads the line buffer from a CLI path argument.
/// The argument [STDIN_SOURCE] reads standard input to EOF, anything
/// else is treated as a file path.
pub fn load_lines(source: &str) -> io::Result<Vec<String>> {
    if source == STDIN_SOURCE {
        let mut bytes = Vec::new();
        io::stdin().lock().read_to_end(&mut bytes)?;
        return Ok(lines_from_bytes(&bytes));
    }
    read_file_lines(Path::new(source))
}

/// Loads the line buffer from a regular file.
/// Refuses directories, pipes and device files up front so the error
/// surfaces before any terminal state changes.
pub fn read_file_lines(path: &Path) -> io::Result<Vec<String>> {
    let metadata = fs::metadata(path)?;
    if !metadata.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Not a regular file: {}", path.display()),
        ));
    }
    let bytes = fs::read(path)?;
    Ok(lines_from_bytes(&bytes))
}

fn lines_from_bytes(bytes: &[u8]) -> Vec<String> {
    let text = String::from_utf8_lossy(bytes);
    let mut lines = split_lines(&text);
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Splits text into lines with universal newline handling.
/// CRLF counts as a single break and a trailing break does not open
/// a new line. Line content is kept without its terminator.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if !is_line_break(ch) {
            continue;
        }
        lines.push(text[start..idx].to_string());
        start = idx + ch.len_utf8();
        if ch == '\r' {
            if let Some(&(next_idx, '\n')) = chars.peek() {
                chars.next();
                start = next_idx + 1;
            }
        }
    }

    if start < text.len() {
        lines.push(text[start..].to_string());
    }
    lines
}

/// Line break characters recognized by [split_lines]: LF, CR and the
/// rarer vertical separators (VT, FF, FS, GS, RS, NEL, LS, PS).
fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r'
            | '\x0b'
            | '\x0c'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}
