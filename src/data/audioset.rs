// ============================================================
// Layer 4 — Audioset (one side of a paired dataset)
// ============================================================
// A list of WAV files exposed as a flat sequence of windows.
//
// Construction only looks at the frame counts stored in the
// manifest, so building an Audioset never touches the disk.
// Files are opened lazily in `item`, one at a time, and the
// reader is dropped before the call returns.
//
// Index → (file, window) lookup walks the per-file counts:
//
//   counts = [3, 1, 2]
//   index 0..3 → file 0, index 3 → file 1, index 4..6 → file 2
//
// Integer samples are scaled to f32 in [-1, 1) the usual way:
// divide by 2^(bits - 1).
//
// Reference: hound crate documentation
//            Rust Book §9 (Error Handling)

use std::io::Read;

use burn::data::dataset::Dataset;
use hound::{SampleFormat, WavReader};
use serde::{Deserialize, Serialize};

use crate::data::chunker::Chunker;
use crate::domain::{
    error::DatasetError,
    file_entry::FileEntry,
    traits::SequencedCollection,
    window::WindowConfig,
};

/// One window of audio, samples interleaved by channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioWindow {
    pub samples:     Vec<f32>,
    pub channels:    u16,
    pub sample_rate: u32,
}

impl AudioWindow {
    /// Number of frames (samples per channel).
    pub fn frames(&self) -> usize {
        self.samples.len() / usize::from(self.channels.max(1))
    }
}

pub struct Audioset {
    files:       Vec<FileEntry>,
    counts:      Vec<usize>,
    total:       usize,
    chunker:     Chunker,
    pad:         bool,
    sample_rate: Option<u32>,
}

impl Audioset {
    pub fn new(files: Vec<FileEntry>, config: &WindowConfig) -> Result<Self, DatasetError> {
        let chunker = Chunker::new(config)?;
        let counts: Vec<usize> = files
            .iter()
            .map(|f| chunker.count(f.size as usize))
            .collect();
        let total = counts.iter().sum();

        tracing::debug!("Audioset: {} files → {} windows", files.len(), total);

        Ok(Self {
            files,
            counts,
            total,
            chunker,
            pad:         config.pad,
            sample_rate: config.sample_rate,
        })
    }

    pub fn files(&self) -> &[FileEntry] {
        &self.files
    }

    /// Resolve a flat index to (file, window within file).
    fn locate(&self, index: usize) -> Option<(&FileEntry, usize)> {
        let mut rest = index;
        for (file, &count) in self.files.iter().zip(&self.counts) {
            if rest < count {
                return Some((file, rest));
            }
            rest -= count;
        }
        None
    }

    fn read_window(&self, file: &FileEntry, window: usize) -> Result<AudioWindow, DatasetError> {
        let wav_err = |source| DatasetError::Wav {
            path: file.path.clone(),
            source,
        };

        let mut reader = WavReader::open(&file.path).map_err(wav_err)?;
        let spec       = reader.spec();

        if let Some(expected) = self.sample_rate {
            if spec.sample_rate != expected {
                return Err(DatasetError::SampleRateMismatch {
                    path:  file.path.clone(),
                    expected,
                    found: spec.sample_rate,
                });
            }
        }

        let channels = usize::from(spec.channels);
        let offset   = self.chunker.offset(window);
        if offset > 0 {
            let offset = u32::try_from(offset).map_err(|_| {
                DatasetError::InvalidWindow(format!("offset {offset} exceeds wav addressing"))
            })?;
            reader.seek(offset)?;
        }

        let limit       = self.chunker.length().map(|frames| frames * channels);
        let mut samples = read_samples(&mut reader, limit).map_err(wav_err)?;

        if let (Some(wanted), true) = (limit, self.pad) {
            samples.resize(wanted, 0.0);
        }

        Ok(AudioWindow {
            samples,
            channels:    spec.channels,
            sample_rate: spec.sample_rate,
        })
    }
}

/// Read up to `limit` interleaved samples as f32.
fn read_samples<R: Read>(
    reader: &mut WavReader<R>,
    limit:  Option<usize>,
) -> Result<Vec<f32>, hound::Error> {
    let spec  = reader.spec();
    let limit = limit.unwrap_or(usize::MAX);
    match spec.sample_format {
        SampleFormat::Float => reader.samples::<f32>().take(limit).collect(),
        SampleFormat::Int => {
            let scale = (1i64 << spec.bits_per_sample.saturating_sub(1)).max(1) as f32;
            reader
                .samples::<i32>()
                .take(limit)
                .map(|s| s.map(|v| v as f32 / scale))
                .collect()
        }
    }
}

impl SequencedCollection for Audioset {
    type Item = AudioWindow;

    fn build(files: Vec<FileEntry>, config: &WindowConfig) -> Result<Self, DatasetError> {
        Audioset::new(files, config)
    }

    fn len(&self) -> usize {
        self.total
    }

    fn item(&self, index: usize) -> Result<AudioWindow, DatasetError> {
        let (file, window) = self.locate(index).ok_or(DatasetError::IndexOutOfRange {
            index,
            len: self.total,
        })?;
        self.read_window(file, window)
    }
}

impl Dataset<AudioWindow> for Audioset {
    fn get(&self, index: usize) -> Option<AudioWindow> {
        self.item(index)
            .map_err(|e| tracing::warn!("Cannot load window {}: {}", index, e))
            .ok()
    }

    fn len(&self) -> usize {
        self.total
    }
}
