//! Core types for blind SVD watermarking

use num_traits::NumCast;

/// One of the four subbands produced by a single-level 2D wavelet
/// decomposition. Which subband carries the watermark is fixed at
/// configuration time and must match between embed and extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Subband {
    /// Approximation (low/low)
    Ll,
    /// Horizontal detail (low/high)
    Lh,
    /// Vertical detail (high/low)
    Hl,
    /// Diagonal detail (high/high)
    Hh,
}

/// Wavelet basis used for the decomposition. Only Haar is defined: it is
/// exactly invertible in floating point and keeps the subband shapes at
/// precisely half the image dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Wavelet {
    #[default]
    Haar,
}

/// Image sample type convertible to the f64 pipeline domain
pub trait Sample: Copy + NumCast + PartialOrd {
    fn to_f64(self) -> f64;
    fn from_f64(value: f64) -> Self;
}

impl Sample for u8 {
    fn to_f64(self) -> f64 {
        self as f64
    }

    fn from_f64(value: f64) -> Self {
        value.round().clamp(0.0, 255.0) as u8
    }
}

impl Sample for u16 {
    fn to_f64(self) -> f64 {
        self as f64
    }

    fn from_f64(value: f64) -> Self {
        value.round().clamp(0.0, 65535.0) as u16
    }
}

impl Sample for f32 {
    fn to_f64(self) -> f64 {
        self as f64
    }

    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

impl Sample for f64 {
    fn to_f64(self) -> f64 {
        self
    }

    fn from_f64(value: f64) -> Self {
        value
    }
}
