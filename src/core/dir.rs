//! Directory listing for the mira browser
//!
//! Produces the entry list the browser renders: a parent entry first,
//! then the directory's children sorted by name. Directories are told
//! apart so they can be marked and descended into.
//!
//! Entry names stay raw [OsStr]s so selection joins the exact name the
//! filesystem reported; decoding to UTF-8 is lossy and display-only.

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::Path;

/// Name of the synthetic parent entry at the top of every listing.
pub const PARENT_ENTRY: &str = "..";

/// Single entry in a browser listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    name: Box<OsStr>,
    is_dir: bool,
}

impl DirEntry {
    fn parent() -> Self {
        DirEntry {
            name: OsString::from(PARENT_ENTRY).into_boxed_os_str(),
            is_dir: true,
        }
    }

    // Getters / Accessors

    /// Raw name as reported by the filesystem. Paths are built from
    /// this, never from the decoded form.
    #[inline]
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    /// Name decoded for display; invalid UTF-8 becomes U+FFFD.
    #[inline]
    pub fn name_str(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    #[inline]
    pub fn is_parent(&self) -> bool {
        &*self.name == PARENT_ENTRY
    }

    /// Entry text as rendered in the listing. Directories other than
    /// the parent entry carry a trailing slash marker.
    pub fn label(&self) -> String {
        if self.is_dir && !self.is_parent() {
            format!("{}/", self.name_str())
        } else {
            self.name_str().into_owned()
        }
    }
}

/// Lists `path` for the browser: the parent entry followed by the
/// directory's children sorted by name. Children that vanish while
/// listing are skipped, and a directory that cannot be read at all
/// degrades to just the parent entry instead of failing.
pub fn list_entries(path: &Path) -> Vec<DirEntry> {
    let mut entries = vec![DirEntry::parent()];

    let Ok(read) = fs::read_dir(path) else {
        return entries;
    };

    let mut names: Vec<OsString> = read
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name())
        .collect();
    names.sort();

    for name in names {
        // Symlinks count as directories when their target is one.
        let is_dir = fs::metadata(path.join(&name))
            .map(|meta| meta.is_dir())
            .unwrap_or(false);
        entries.push(DirEntry {
            name: name.into_boxed_os_str(),
            is_dir,
        });
    }

    entries
}
