// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// Two seams keep the matching and pairing code generic:
//
//   KeyExtractor        → pulls an alignment key out of a path.
//                         The matcher groups and aligns entries
//                         by key and sorts whatever has none.
//   SequencedCollection → one side of a paired dataset: built
//                         from a file list plus a WindowConfig,
//                         it exposes a length and indexed items.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use crate::domain::{error::DatasetError, file_entry::FileEntry, window::WindowConfig};

// ─── KeyExtractor ─────────────────────────────────────────────────────────────
/// Maps a path to the key that identifies its recording.
///
/// Implementations:
///   - NoKey     → never yields a key (plain sort matching)
///   - FileIdKey → the digits of a trailing `fileid_<N>.wav`
pub trait KeyExtractor {
    fn key(&self, path: &str) -> Option<String>;
}

/// Extractor that never finds a key, so every entry falls back to sorting.
pub struct NoKey;

impl KeyExtractor for NoKey {
    fn key(&self, _path: &str) -> Option<String> {
        None
    }
}

/// Extracts `N` from paths ending in `fileid_<N>.wav`.
///
/// `fileid_7.wav` and `a/b/x_fileid_12.wav` yield `7` and `12`;
/// `fileid_.wav`, `fileid_3.flac` and `fileid_3.wav.bak` yield nothing.
pub struct FileIdKey;

impl KeyExtractor for FileIdKey {
    fn key(&self, path: &str) -> Option<String> {
        let stem   = path.strip_suffix(".wav")?;
        let digits = stem.len() - stem.trim_end_matches(|c: char| c.is_ascii_digit()).len();
        if digits == 0 {
            return None;
        }
        let (prefix, id) = stem.split_at(stem.len() - digits);
        prefix.ends_with("fileid_").then(|| id.to_string())
    }
}

// ─── SequencedCollection ──────────────────────────────────────────────────────
/// One side of a paired dataset.
///
/// Two instances built from identically ordered lists with equal frame
/// counts must report the same length.
pub trait SequencedCollection: Sized {
    type Item;

    fn build(files: Vec<FileEntry>, config: &WindowConfig) -> Result<Self, DatasetError>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fetch the item at `index`; out of range is IndexOutOfRange.
    fn item(&self, index: usize) -> Result<Self::Item, DatasetError>;
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_id_key_extracts_trailing_digits() {
        assert_eq!(FileIdKey.key("b/fileid_1.wav"),        Some("1".into()));
        assert_eq!(FileIdKey.key("a/x_fileid_42.wav"),     Some("42".into()));
        assert_eq!(FileIdKey.key("fileid_007.wav"),        Some("007".into()));
    }

    #[test]
    fn test_file_id_key_requires_exact_pattern() {
        assert_eq!(FileIdKey.key("extra/z.wav"),           None);
        assert_eq!(FileIdKey.key("fileid_.wav"),           None);
        assert_eq!(FileIdKey.key("fileid_3.flac"),         None);
        assert_eq!(FileIdKey.key("fileid_3.wav.bak"),      None);
        assert_eq!(FileIdKey.key("fileid-3.wav"),          None);
        assert_eq!(FileIdKey.key("fileid_3a.wav"),         None);
    }

    #[test]
    fn test_no_key_never_matches() {
        assert_eq!(NoKey.key("fileid_1.wav"), None);
    }
}
