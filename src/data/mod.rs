// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between two directories of recordings and an
// index-aligned (noisy, clean) dataset.
//
//   audio dirs
//       │
//       ▼
//   loader        → builds / reads noisy.json and clean.json
//       │
//       ▼
//   matcher       → aligns noisy and clean so index i is one recording
//       │
//       ├──────────────────────────┐
//       ▼                          ▼
//   chunker + audioset         splitter
//   (windows per side)         (train / validation assignment)
//       │
//       ▼
//   dataset       → PairedDataset, implements burn's Dataset trait
//
// Reference: Burn Book §4 (Datasets and Dataloaders)
//            Rust Book §13 (Iterators and Closures)

/// Reads, writes, and builds [path, frames] manifests
pub mod loader;

/// Aligns noisy and clean file lists
pub mod matcher;

/// Window counting and offsets for one recording
pub mod chunker;

/// One side of a paired dataset, backed by WAV files
pub mod audioset;

/// The (noisy, clean) paired view
pub mod dataset;

/// Seeded train/validation assignment of matched pairs
pub mod splitter;
