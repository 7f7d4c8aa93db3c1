// ============================================================
// Layer 3 — Error Taxonomy
// ============================================================
// Every failure the matcher, the paired view, and the split
// builder can report. All of them are terminal for the
// operation in progress; none is retried.
//
// The application layer wraps these in anyhow::Error with
// extra context, so only this layer needs typed variants.
//
// Reference: Rust Book §9 (Error Handling)
//            thiserror crate documentation

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("invalid value for matching: '{0}' (expected 'sort' or 'dns')")]
    InvalidStrategy(String),

    #[error("clean file '{path}' has id {id} but no noisy file carries that id")]
    UnmatchedId { id: String, path: String },

    #[error("noisy and clean sides are misaligned: {noisy} noisy vs {clean} clean")]
    LengthMismatch { noisy: usize, clean: usize },

    #[error("index {index} out of range for dataset of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("split ratio must be within [0, 1], got {0}")]
    InvalidRatio(f64),

    #[error("invalid window configuration: {0}")]
    InvalidWindow(String),

    #[error("'{path}' has sample rate {found}, expected {expected}")]
    SampleRateMismatch {
        path: String,
        expected: u32,
        found: u32,
    },

    #[error("path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),

    #[error("path has no file name: {}", .0.display())]
    NoFileName(PathBuf),

    #[error("cannot parse manifest '{}'", path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot read wav '{path}'")]
    Wav {
        path: String,
        #[source]
        source: hound::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}
