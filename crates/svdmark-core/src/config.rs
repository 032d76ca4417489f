//! Embedding/extraction configuration

use crate::consts::MIN_BLOCK_SIZE;
use crate::{Subband, Wavelet, WatermarkError, WatermarkResult};

/// Configuration shared by one embed/extract pair.
///
/// Every field must be identical on both sides: a different block size,
/// subband or wavelet silently decodes garbage rather than failing.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WatermarkConfig {
    /// Side length of the square DCT blocks (>= 6)
    pub block_size: usize,
    /// Which wavelet subband carries the watermark
    pub subband: Subband,
    /// Embedding strength; > 0 and != 1. Values further from 1 are more
    /// robust and more visible. Use alpha > 1: values in (0, 1) embed
    /// the opposite ordering, so every extracted bit comes back
    /// inverted.
    pub alpha: f64,
    /// Wavelet basis for the decomposition
    pub wavelet: Wavelet,
}

impl WatermarkConfig {
    pub fn new(block_size: usize, subband: Subband, alpha: f64) -> Self {
        Self {
            block_size,
            subband,
            alpha,
            wavelet: Wavelet::Haar,
        }
    }

    /// Check the configuration invariants.
    ///
    /// alpha == 1 collapses both modulated singular values to the same
    /// mean, making the bit unrecoverable, so it is rejected up front
    /// instead of producing an undecodable image.
    pub fn validate(&self) -> WatermarkResult<()> {
        if self.block_size < MIN_BLOCK_SIZE {
            return Err(WatermarkError::BlockTooSmall {
                size: self.block_size,
                min: MIN_BLOCK_SIZE,
            });
        }
        if self.alpha <= 0.0 {
            return Err(WatermarkError::InvalidConfig(format!(
                "alpha must be positive, got {}",
                self.alpha
            )));
        }
        if self.alpha == 1.0 {
            return Err(WatermarkError::InvalidConfig(
                "alpha == 1 makes the embedded bit unrecoverable".into(),
            ));
        }
        Ok(())
    }
}

impl Default for WatermarkConfig {
    fn default() -> Self {
        Self::new(8, Subband::Ll, 2.0)
    }
}
