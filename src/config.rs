//! Detection configuration

use crate::error::{PlaintextError, Result};

/// Bytes per preview kilobyte
pub const KB: u64 = 1024;

/// Size cap for preview checks, in kilobytes
///
/// Always non-zero and representable as a byte count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewLimit {
    kb: usize,
}

impl PreviewLimit {
    /// Create a limit of `kb` kilobytes
    ///
    /// Fails with [`PlaintextError::InvalidLength`] for zero or for a
    /// value whose byte count overflows `u64`.
    pub fn from_kb(kb: usize) -> Result<Self> {
        if kb == 0 {
            return Err(PlaintextError::InvalidLength { max_kb: kb });
        }
        u64::try_from(kb)
            .ok()
            .and_then(|v| v.checked_mul(KB))
            .ok_or(PlaintextError::InvalidLength { max_kb: kb })?;
        Ok(Self { kb })
    }

    /// Limit in kilobytes
    pub fn kb(&self) -> usize {
        self.kb
    }

    /// Limit in bytes
    pub fn bytes(&self) -> u64 {
        // Checked in `from_kb`
        self.kb as u64 * KB
    }
}

/// Configuration for a [`Detector`](crate::Detector)
#[derive(Debug, Clone, Default)]
pub struct DetectConfig {
    /// Only inspect this many leading kilobytes of streams and files.
    /// `None` reads to end of stream.
    pub preview: Option<PreviewLimit>,
}

impl DetectConfig {
    /// Config that previews the first `kb` kilobytes
    pub fn preview_kb(kb: usize) -> Result<Self> {
        Ok(Self {
            preview: Some(PreviewLimit::from_kb(kb)?),
        })
    }
}
