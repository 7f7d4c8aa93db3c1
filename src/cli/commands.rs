// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the three subcommands: `manifest`, `split`, `inspect`
// and all their configurable flags.
//
// The `From` impls at the bottom of each section are the
// boundary between Layer 1 and Layer 2: use cases only ever
// see config structs, never clap types.
//
// Reference: Rust Book §12 (Building a CLI Program)

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::application::{
    inspect_use_case::InspectConfig,
    manifest_use_case::ManifestConfig,
    split_use_case::SplitConfig,
};
use crate::domain::{strategy::MatchStrategy, window::WindowConfig};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write noisy.json and clean.json for two audio directories
    Manifest(ManifestArgs),

    /// Copy matched pairs into train_* and val_* directories
    Split(SplitArgs),

    /// Open a paired dataset and print its size
    Inspect(InspectArgs),
}

// ─── manifest ─────────────────────────────────────────────────────────────────
#[derive(Args, Debug)]
pub struct ManifestArgs {
    /// Directory tree holding the noisy recordings
    #[arg(long)]
    pub noisy_dir: PathBuf,

    /// Directory tree holding the clean recordings
    #[arg(long)]
    pub clean_dir: PathBuf,

    /// Where noisy.json and clean.json are written
    #[arg(long)]
    pub out_dir: PathBuf,
}

impl From<ManifestArgs> for ManifestConfig {
    fn from(a: ManifestArgs) -> Self {
        ManifestConfig {
            noisy_dir: a.noisy_dir,
            clean_dir: a.clean_dir,
            out_dir:   a.out_dir,
        }
    }
}

// ─── split ────────────────────────────────────────────────────────────────────
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Directory of clean files (not recursed)
    #[arg(long)]
    pub clean_dir: PathBuf,

    /// Directory of noisy files (not recursed)
    #[arg(long)]
    pub noisy_dir: PathBuf,

    /// How files are paired: `sort` or `dns`
    #[arg(long, default_value = "sort")]
    pub matching: MatchStrategy,

    /// Fraction of pairs copied to validation
    #[arg(long, default_value_t = 0.1)]
    pub ratio: f64,

    /// Seed for the validation sample
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

impl From<SplitArgs> for SplitConfig {
    fn from(a: SplitArgs) -> Self {
        SplitConfig {
            clean_dir: a.clean_dir,
            noisy_dir: a.noisy_dir,
            matching:  a.matching,
            ratio:     a.ratio,
            seed:      a.seed,
        }
    }
}

// ─── inspect ──────────────────────────────────────────────────────────────────
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Directory containing noisy.json and clean.json
    #[arg(long)]
    pub json_dir: PathBuf,

    /// How files are paired: `sort` or `dns`
    #[arg(long, default_value = "sort")]
    pub matching: MatchStrategy,

    /// Window length in frames; whole files when omitted
    #[arg(long)]
    pub length: Option<usize>,

    /// Hop between windows in frames; defaults to --length
    #[arg(long)]
    pub stride: Option<usize>,

    /// Drop trailing partial windows instead of zero-padding them
    #[arg(long)]
    pub no_pad: bool,

    /// Require every file to have this sample rate
    #[arg(long)]
    pub sample_rate: Option<u32>,

    /// Also load this pair and print its shape
    #[arg(long)]
    pub index: Option<usize>,
}

impl From<InspectArgs> for InspectConfig {
    fn from(a: InspectArgs) -> Self {
        InspectConfig {
            json_dir: a.json_dir,
            matching: a.matching,
            window:   WindowConfig {
                length:      a.length,
                stride:      a.stride,
                pad:         !a.no_pad,
                sample_rate: a.sample_rate,
            },
            index:    a.index,
        }
    }
}
