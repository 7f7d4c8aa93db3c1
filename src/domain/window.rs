// ============================================================
// Layer 3 — Window Configuration
// ============================================================
// How each recording is cut into training examples. Both sides
// of a paired dataset are built with the same WindowConfig so a
// matched pair always yields the same number of windows.
//
//   length      window size in frames (None = whole file)
//   stride      hop between windows (None = length)
//   pad         zero-pad the last partial window
//   sample_rate expected rate of every file (None = any)

use serde::{Deserialize, Serialize};

use crate::domain::error::DatasetError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    pub length:      Option<usize>,
    pub stride:      Option<usize>,
    pub pad:         bool,
    pub sample_rate: Option<u32>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            length:      None,
            stride:      None,
            pad:         true,
            sample_rate: None,
        }
    }
}

impl WindowConfig {
    /// Reject zero-sized windows and hops; they cannot make progress.
    pub fn validate(&self) -> Result<(), DatasetError> {
        if self.length == Some(0) {
            return Err(DatasetError::InvalidWindow("length must be positive".into()));
        }
        if self.stride == Some(0) {
            return Err(DatasetError::InvalidWindow("stride must be positive".into()));
        }
        Ok(())
    }

    /// The effective hop between consecutive windows.
    pub fn effective_stride(&self) -> Option<usize> {
        self.stride.or(self.length)
    }
}
