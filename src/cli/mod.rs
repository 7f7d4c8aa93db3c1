// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses the command line with clap and hands each subcommand
// to its use case in Layer 2. This is the only layer that
// prints to stdout.
//
// Three commands are supported:
//   1. `manifest` — scan audio dirs into noisy.json/clean.json
//   2. `split`    — copy matched pairs into train_*/val_*
//   3. `inspect`  — open a paired dataset and report on it
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, InspectArgs, ManifestArgs, SplitArgs};

use crate::application::{
    inspect_use_case::InspectUseCase,
    manifest_use_case::ManifestUseCase,
    split_use_case::SplitUseCase,
};

#[derive(Parser, Debug)]
#[command(
    name = "paired-audio-dataset",
    version,
    about = "Match noisy and clean recordings and build train/validation splits."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Manifest(args) => run_manifest(args),
            Commands::Split(args)    => run_split(args),
            Commands::Inspect(args)  => run_inspect(args),
        }
    }
}

fn run_manifest(args: ManifestArgs) -> Result<()> {
    let out_dir        = args.out_dir.clone();
    let (noisy, clean) = ManifestUseCase::new(args.into()).execute()?;
    println!(
        "Wrote {} noisy and {} clean entries to {}",
        noisy,
        clean,
        out_dir.display()
    );
    Ok(())
}

fn run_split(args: SplitArgs) -> Result<()> {
    tracing::info!(
        "Splitting '{}' / '{}' (matching={}, ratio={}, seed={})",
        args.clean_dir.display(),
        args.noisy_dir.display(),
        args.matching,
        args.ratio,
        args.seed
    );
    let summary = SplitUseCase::new(args.into()).execute()?;
    println!(
        "Copied {} training and {} validation pairs",
        summary.train, summary.validation
    );
    Ok(())
}

fn run_inspect(args: InspectArgs) -> Result<()> {
    let report = InspectUseCase::new(args.into()).execute()?;
    println!("Matched pairs: {}", report.pairs);
    println!("Examples:      {}", report.examples);
    if let Some(shape) = report.sample {
        println!(
            "Pair {}: noisy {} frames, clean {} frames, {} ch @ {} Hz",
            shape.index, shape.noisy_frames, shape.clean_frames, shape.channels, shape.sample_rate
        );
    }
    Ok(())
}
