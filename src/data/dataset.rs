// ============================================================
// Layer 4 — Paired Dataset View
// ============================================================
// Two sequenced collections, noisy and clean, behind a single
// index: item i is (noisy window i, clean window i).
//
// Construction order matters. The file lists are matched and
// checked for equal length BEFORE either collection is built,
// because the windowing of each side depends on its file order.
// The collection lengths are compared once more afterwards:
// matched files with different durations would yield different
// window counts and must not be paired silently.
//
// Implements burn's Dataset trait so the view plugs into
// burn's DataLoader directly.
//
// Reference: Burn Book §4 (Datasets and Dataloaders)

use std::path::Path;

use burn::data::dataset::Dataset;

use crate::data::{audioset::Audioset, loader::load_pair, matcher::match_files};
use crate::domain::{
    error::DatasetError,
    file_entry::FileEntry,
    strategy::MatchStrategy,
    traits::SequencedCollection,
    window::WindowConfig,
};

pub struct PairedDataset<C = Audioset> {
    noisy: C,
    clean: C,
}

impl<C: SequencedCollection> PairedDataset<C> {
    /// Open the dataset described by `noisy.json` and `clean.json` in `json_dir`.
    pub fn open(
        json_dir: &Path,
        matching: MatchStrategy,
        config:   &WindowConfig,
    ) -> Result<Self, DatasetError> {
        let (noisy, clean) = load_pair(json_dir)?;
        Self::from_entries(noisy, clean, matching, config)
    }

    /// Match two manifests and build both sides with the same windowing.
    pub fn from_entries(
        noisy:    Vec<FileEntry>,
        clean:    Vec<FileEntry>,
        matching: MatchStrategy,
        config:   &WindowConfig,
    ) -> Result<Self, DatasetError> {
        let matched = match_files(noisy, clean, matching)?.ensure_aligned()?;

        let clean = C::build(matched.clean, config)?;
        let noisy = C::build(matched.noisy, config)?;

        if noisy.len() != clean.len() {
            return Err(DatasetError::LengthMismatch {
                noisy: noisy.len(),
                clean: clean.len(),
            });
        }

        tracing::info!("Paired dataset ready: {} examples", clean.len());
        Ok(Self { noisy, clean })
    }

    pub fn len(&self) -> usize {
        self.noisy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The (noisy, clean) pair at `index`.
    pub fn item(&self, index: usize) -> Result<(C::Item, C::Item), DatasetError> {
        if index >= self.len() {
            return Err(DatasetError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        Ok((self.noisy.item(index)?, self.clean.item(index)?))
    }

    pub fn noisy(&self) -> &C {
        &self.noisy
    }

    pub fn clean(&self) -> &C {
        &self.clean
    }
}

impl<C> Dataset<(C::Item, C::Item)> for PairedDataset<C>
where
    C: SequencedCollection + Send + Sync,
{
    fn get(&self, index: usize) -> Option<(C::Item, C::Item)> {
        match self.item(index) {
            Ok(pair) => Some(pair),
            Err(DatasetError::IndexOutOfRange { .. }) => None,
            Err(e) => {
                tracing::warn!("Cannot load pair {}: {}", index, e);
                None
            }
        }
    }

    fn len(&self) -> usize {
        self.noisy.len()
    }
}
