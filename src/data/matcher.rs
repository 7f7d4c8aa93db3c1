// ============================================================
// Layer 4 — Noisy/Clean Matcher
// ============================================================
// Reorders two independently listed file collections so that
// position i on both sides is the same recording.
//
// Both strategies run the same routine, parameterised by a
// KeyExtractor:
//
//   1. noisy entries with a key go into a key → entry map,
//      the rest into an "extra noisy" bucket
//   2. clean entries are scanned in their original order; a
//      keyed entry pulls its noisy partner from the map and
//      both are appended to the outputs, the rest go into an
//      "extra clean" bucket
//   3. each extras bucket is sorted on its own and appended
//
// With NoKey every entry is an extra, which is exactly the
// plain "sort both sides" strategy. With FileIdKey it is the
// DNS-style alignment by `fileid_<N>.wav`.
//
// Extras are paired by position only. Callers mixing another
// dataset into a keyed one must make sure both sides sort the
// same way; nothing here checks it.
//
// Reference: Rust Book §8 (Vectors, Hash Maps)

use std::collections::HashMap;

use crate::domain::{
    error::DatasetError,
    file_entry::HasPath,
    strategy::MatchStrategy,
    traits::{FileIdKey, KeyExtractor, NoKey},
};

/// Two lists after matching. Index i on both sides is one recording.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matched<T> {
    pub noisy: Vec<T>,
    pub clean: Vec<T>,
}

impl<T> Matched<T> {
    pub fn len(&self) -> usize {
        self.clean.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clean.is_empty()
    }

    /// Fail with LengthMismatch unless both sides have the same length.
    pub fn ensure_aligned(self) -> Result<Self, DatasetError> {
        if self.noisy.len() != self.clean.len() {
            return Err(DatasetError::LengthMismatch {
                noisy: self.noisy.len(),
                clean: self.clean.len(),
            });
        }
        Ok(self)
    }

    /// Iterate over (noisy, clean) pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (&T, &T)> {
        self.noisy.iter().zip(self.clean.iter())
    }
}

/// Match `noisy` against `clean` with the given strategy.
pub fn match_files<T>(
    noisy:    Vec<T>,
    clean:    Vec<T>,
    strategy: MatchStrategy,
) -> Result<Matched<T>, DatasetError>
where
    T: HasPath + Ord + Clone,
{
    tracing::debug!(
        "Matching {} noisy and {} clean entries with '{}'",
        noisy.len(),
        clean.len(),
        strategy
    );
    match strategy {
        MatchStrategy::Sort => align_by_key(noisy, clean, &NoKey),
        MatchStrategy::Dns  => align_by_key(noisy, clean, &FileIdKey),
    }
}

/// Group-and-align by key, falling back to independent sorting for
/// entries without one.
pub fn align_by_key<T>(
    noisy:     Vec<T>,
    clean:     Vec<T>,
    extractor: &dyn KeyExtractor,
) -> Result<Matched<T>, DatasetError>
where
    T: HasPath + Ord + Clone,
{
    let mut by_key: HashMap<String, T> = HashMap::new();
    let mut extra_noisy = Vec::new();

    for entry in noisy {
        match extractor.key(entry.path()) {
            // A repeated key keeps the last entry seen
            Some(key) => { by_key.insert(key, entry); }
            None      => extra_noisy.push(entry),
        }
    }

    let mut out_noisy   = Vec::with_capacity(clean.len());
    let mut out_clean   = Vec::with_capacity(clean.len());
    let mut extra_clean = Vec::new();
    let mut used        = 0usize;

    for entry in clean {
        let Some(key) = extractor.key(entry.path()) else {
            extra_clean.push(entry);
            continue;
        };
        let partner = by_key.get(&key).cloned().ok_or_else(|| DatasetError::UnmatchedId {
            id:   key.clone(),
            path: entry.path().to_string(),
        })?;
        out_noisy.push(partner);
        out_clean.push(entry);
        used += 1;
    }

    if by_key.len() > used {
        tracing::debug!(
            "{} keyed noisy entries have no clean counterpart and were dropped",
            by_key.len() - used
        );
    }

    extra_noisy.sort();
    extra_clean.sort();
    out_noisy.extend(extra_noisy);
    out_clean.extend(extra_clean);

    Ok(Matched {
        noisy: out_noisy,
        clean: out_clean,
    })
}
