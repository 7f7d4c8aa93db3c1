// ============================================================
// Layer 4 — Window Chunker
// ============================================================
// Cuts a recording of `n` frames into fixed-length windows.
//
// Example with length=4, stride=2 on 9 frames:
//   Window 0: frames 0-3
//   Window 1: frames 2-5
//   Window 2: frames 4-7
//   Window 3: frames 6-8 + 1 zero   (only when pad = true)
//
// Counting rules:
//   no length        → 1 window, the whole file
//   n < length       → 1 padded window, or 0 without pad
//   pad              → ceil((n - length) / stride) + 1
//   no pad           → (n - length) / stride + 1
//
// Only the frame counts from the manifest are used here, so
// two sides with equal sizes always produce equal counts.
//
// Reference: Rust Book §8 (Slices)

use crate::domain::{error::DatasetError, window::WindowConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunker {
    /// Frames per window, or None for whole files
    length: Option<usize>,
    /// Frames between window starts
    stride: usize,
    /// Whether a trailing partial window is kept
    pad: bool,
}

impl Chunker {
    pub fn new(config: &WindowConfig) -> Result<Self, DatasetError> {
        config.validate()?;
        Ok(Self {
            length: config.length,
            stride: config.effective_stride().unwrap_or(1),
            pad:    config.pad,
        })
    }

    pub fn length(&self) -> Option<usize> {
        self.length
    }

    /// Number of windows a file of `frames` frames yields.
    pub fn count(&self, frames: usize) -> usize {
        let Some(length) = self.length else {
            return 1;
        };
        if frames < length {
            return usize::from(self.pad);
        }
        let span = frames - length;
        if self.pad {
            span.div_ceil(self.stride) + 1
        } else {
            span / self.stride + 1
        }
    }

    /// First frame of window `k`.
    pub fn offset(&self, k: usize) -> usize {
        if self.length.is_none() {
            return 0;
        }
        k * self.stride
    }
}
