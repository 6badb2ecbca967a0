//! Case-insensitive line search for mira
//!
//! Plain substring matching over the line buffer. Forward scans run
//! from a start index to the end, backward scans from a start index
//! down to the first line. Both report the first matching line index.

/// Scans `lines[start..]` for the first line containing `query`.
/// The comparison is case-insensitive. Returns the matching index.
pub fn search_forward(lines: &[String], query: &str, start: usize) -> Option<usize> {
    let needle = query.to_lowercase();
    (start..lines.len()).find(|&idx| lines[idx].to_lowercase().contains(&needle))
}

/// Scans `lines[..=start]` in reverse for the first line containing
/// `query`, so the nearest match at or above `start` wins.
pub fn search_backward(lines: &[String], query: &str, start: usize) -> Option<usize> {
    if lines.is_empty() {
        return None;
    }
    let needle = query.to_lowercase();
    let start = start.min(lines.len() - 1);
    (0..=start).rev().find(|&idx| lines[idx].to_lowercase().contains(&needle))
}
