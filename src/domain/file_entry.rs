// ============================================================
// Layer 3 — FileEntry Domain Type
// ============================================================
// One row of a manifest: where a recording lives and how many
// frames (samples per channel) it holds.
//
// On disk a manifest row is a 2-element JSON array:
//   ["path/to/file.wav", 16000]
// The serde `from`/`into` attributes map the struct onto that
// tuple shape so the rest of the code can use named fields.
//
// Ordering compares the path first, then the size, so sorting
// a list of entries is sorting by path.

use serde::{Deserialize, Serialize};

/// A recording on disk together with its length in frames.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "(String, u64)", into = "(String, u64)")]
pub struct FileEntry {
    /// Identity of the entry
    pub path: String,

    /// Number of frames, carried along for windowing
    pub size: u64,
}

impl FileEntry {
    pub fn new(path: impl Into<String>, size: u64) -> Self {
        Self {
            path: path.into(),
            size,
        }
    }
}

impl From<(String, u64)> for FileEntry {
    fn from((path, size): (String, u64)) -> Self {
        Self { path, size }
    }
}

impl From<FileEntry> for (String, u64) {
    fn from(entry: FileEntry) -> Self {
        (entry.path, entry.size)
    }
}

/// Anything the matcher can align: it only needs a path to look at.
pub trait HasPath {
    fn path(&self) -> &str;
}

impl HasPath for FileEntry {
    fn path(&self) -> &str {
        &self.path
    }
}

/// Bare filenames, as produced by listing a directory.
impl HasPath for String {
    fn path(&self) -> &str {
        self
    }
}
