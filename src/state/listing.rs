// Listing state - the single owner of the current directory's entries
use crate::entry::Entry;
use crate::io;
use std::path::Path;

/// One generation of directory contents. Replacing a `Listing` drops every
/// cached galley of the previous generation with it.
pub struct Listing {
    pub entries: Vec<Entry>,
    pub error: Option<String>,
}

impl Listing {
    /// Loads `path`. An unreadable directory becomes a recoverable error
    /// state: only the `..` entry survives so the user can still leave.
    pub fn load(path: &Path) -> Self {
        match io::read_directory(path) {
            Ok(entries) => Self {
                entries,
                error: None,
            },
            Err(err) => {
                log::warn!("failed to read {}: {}", path.display(), err);
                let mut entries = Vec::new();
                if let Some(parent) = path.parent() {
                    entries.push(Entry::parent(parent.to_path_buf()));
                }
                Self {
                    entries,
                    error: Some(err.to_string()),
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops cached galleys so the next frame lays text out afresh.
    /// Called on page turns; navigation replaces the listing wholesale.
    pub fn invalidate_text(&mut self) {
        for entry in &mut self.entries {
            entry.text = None;
        }
    }
}
