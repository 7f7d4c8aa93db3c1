// ============================================================
// Layer 2 — InspectUseCase
// ============================================================
// Opens a paired dataset the same way a training run would and
// reports its size, plus the shape of one pair on request.
// Useful to confirm that matching and windowing line up before
// launching a long job.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::dataset::PairedDataset;
use crate::domain::{strategy::MatchStrategy, window::WindowConfig};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectConfig {
    pub json_dir: PathBuf,
    pub matching: MatchStrategy,
    pub window:   WindowConfig,
    pub index:    Option<usize>,
}

/// Shape of a single (noisy, clean) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairShape {
    pub index:        usize,
    pub noisy_frames: usize,
    pub clean_frames: usize,
    pub channels:     u16,
    pub sample_rate:  u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectReport {
    pub pairs:    usize,
    pub examples: usize,
    pub sample:   Option<PairShape>,
}

pub struct InspectUseCase {
    config: InspectConfig,
}

impl InspectUseCase {
    pub fn new(config: InspectConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<InspectReport> {
        let cfg = &self.config;

        let dataset: PairedDataset = PairedDataset::open(&cfg.json_dir, cfg.matching, &cfg.window)
            .with_context(|| format!("Cannot open paired dataset in '{}'", cfg.json_dir.display()))?;

        let sample = match cfg.index {
            Some(index) => {
                let (noisy, clean) = dataset
                    .item(index)
                    .with_context(|| format!("Cannot load pair {index}"))?;
                Some(PairShape {
                    index,
                    noisy_frames: noisy.frames(),
                    clean_frames: clean.frames(),
                    channels:     clean.channels,
                    sample_rate:  clean.sample_rate,
                })
            }
            None => None,
        };

        Ok(InspectReport {
            pairs:    dataset.clean().files().len(),
            examples: dataset.len(),
            sample,
        })
    }
}
