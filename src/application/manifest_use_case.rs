// ============================================================
// Layer 2 — ManifestUseCase
// ============================================================
// Scans a noisy and a clean audio directory and writes the two
// manifests a PairedDataset is opened from:
//
//   out_dir/noisy.json
//   out_dir/clean.json

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::loader::{build_manifest, save_manifest, CLEAN_MANIFEST, NOISY_MANIFEST};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestConfig {
    pub noisy_dir: PathBuf,
    pub clean_dir: PathBuf,
    pub out_dir:   PathBuf,
}

pub struct ManifestUseCase {
    config: ManifestConfig,
}

impl ManifestUseCase {
    pub fn new(config: ManifestConfig) -> Self {
        Self { config }
    }

    /// Returns the number of (noisy, clean) entries written.
    pub fn execute(&self) -> Result<(usize, usize)> {
        let cfg = &self.config;

        let noisy = build_manifest(&cfg.noisy_dir)
            .with_context(|| format!("Cannot scan '{}'", cfg.noisy_dir.display()))?;
        let clean = build_manifest(&cfg.clean_dir)
            .with_context(|| format!("Cannot scan '{}'", cfg.clean_dir.display()))?;

        fs::create_dir_all(&cfg.out_dir)
            .with_context(|| format!("Cannot create '{}'", cfg.out_dir.display()))?;
        save_manifest(&cfg.out_dir.join(NOISY_MANIFEST), &noisy)?;
        save_manifest(&cfg.out_dir.join(CLEAN_MANIFEST), &clean)?;

        if noisy.len() != clean.len() {
            tracing::warn!(
                "Manifests differ in size ({} noisy, {} clean); only 'dns' matching can pair them",
                noisy.len(),
                clean.len()
            );
        }
        tracing::info!("Wrote manifests to '{}'", cfg.out_dir.display());
        Ok((noisy.len(), clean.len()))
    }
}
