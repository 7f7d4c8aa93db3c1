// ============================================================
// Layer 2 — SplitUseCase
// ============================================================
// Splits two directories of matched recordings into training
// and validation copies:
//
//   Step 1: List both directories           (Layer 6 - infra)
//   Step 2: Match the filename lists        (Layer 4 - data)
//   Step 3: Assign train/validation         (Layer 4 - data)
//   Step 4: Create train_*/val_* siblings   (Layer 6 - infra)
//   Step 5: Copy each pair                  (Layer 6 - infra)
//
// A failure part-way leaves the files copied so far in place.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::data::{
    matcher::match_files,
    splitter::{assign_splits, SplitLabel},
};
use crate::domain::strategy::MatchStrategy;
use crate::infra::split_layout::{copy_into, list_file_names, SplitDirs};

// ─── Split Configuration ─────────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitConfig {
    pub clean_dir: PathBuf,
    pub noisy_dir: PathBuf,
    pub matching:  MatchStrategy,
    /// Fraction of pairs copied to validation
    pub ratio:     f64,
    pub seed:      u64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            clean_dir: PathBuf::from("clean"),
            noisy_dir: PathBuf::from("noisy"),
            matching:  MatchStrategy::Sort,
            ratio:     0.1,
            seed:      42,
        }
    }
}

/// How many pairs ended up on each side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitSummary {
    pub train:      usize,
    pub validation: usize,
}

pub struct SplitUseCase {
    config: SplitConfig,
}

impl SplitUseCase {
    pub fn new(config: SplitConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<SplitSummary> {
        let cfg = &self.config;

        // ── Step 1: List both directories ────────────────────────────────────
        let clean = list_file_names(&cfg.clean_dir)
            .with_context(|| format!("Cannot list '{}'", cfg.clean_dir.display()))?;
        let noisy = list_file_names(&cfg.noisy_dir)
            .with_context(|| format!("Cannot list '{}'", cfg.noisy_dir.display()))?;
        tracing::info!("Found {} clean and {} noisy files", clean.len(), noisy.len());

        // ── Step 2: Match ────────────────────────────────────────────────────
        let matched = match_files(noisy, clean, cfg.matching)
            .with_context(|| format!("Matching with '{}' failed", cfg.matching))?;

        // ── Step 3: Assign with a generator local to this run ─────────────────
        let mut rng = StdRng::seed_from_u64(cfg.seed);
        let plan    = assign_splits(matched, cfg.ratio, &mut rng)
            .context("Cannot assign train/validation splits")?;

        // ── Step 4: Output directories ───────────────────────────────────────
        let clean_dirs = SplitDirs::create(&cfg.clean_dir)
            .with_context(|| format!("Cannot create split dirs for '{}'", cfg.clean_dir.display()))?;
        let noisy_dirs = SplitDirs::create(&cfg.noisy_dir)
            .with_context(|| format!("Cannot create split dirs for '{}'", cfg.noisy_dir.display()))?;

        // ── Step 5: Copy ─────────────────────────────────────────────────────
        let mut summary = SplitSummary::default();
        for pair in &plan {
            copy_pair(&cfg.clean_dir, &pair.clean, clean_dirs.for_label(pair.label))?;
            copy_pair(&cfg.noisy_dir, &pair.noisy, noisy_dirs.for_label(pair.label))?;
            match pair.label {
                SplitLabel::Train      => summary.train += 1,
                SplitLabel::Validation => summary.validation += 1,
            }
        }

        tracing::info!(
            "Split complete: {} training, {} validation pairs",
            summary.train,
            summary.validation
        );
        Ok(summary)
    }
}

fn copy_pair(src_dir: &Path, name: &str, dest_dir: &Path) -> Result<()> {
    let src = src_dir.join(name);
    copy_into(&src, dest_dir)
        .with_context(|| format!("Cannot copy '{}' to '{}'", src.display(), dest_dir.display()))?;
    Ok(())
}
