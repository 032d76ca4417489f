//! # svdmark - Blind SVD Image Watermarking
//!
//! Embeds a grid of hidden bits into a grayscale image and recovers it
//! from the (possibly degraded) result, without access to the original.
//!
//! One bit is carried per block: the image is decomposed with a
//! single-level Haar wavelet, one subband is tiled into square blocks,
//! each block is DCT-transformed, and two fixed 2x2 submatrices of
//! mid-frequency coefficients are rewritten so that the ordering of
//! their largest singular values encodes the bit.
//!
//! ## Quick Start
//!
//! ```
//! use svdmark::{embed, extract, watermark_capacity, BitGrid, Plane, WatermarkConfig};
//!
//! let image = Plane::from_fn(64, 64, |r, c| ((r * 5 + c * 3) % 251) as f64);
//! let config = WatermarkConfig::default();
//!
//! let (rows, cols) = watermark_capacity(64, 64, &config).unwrap();
//! let bits = BitGrid::from_fn(rows, cols, |r, c| (r + c) % 2 == 0);
//!
//! let marked = embed(&image, &bits, &config).unwrap();
//! let recovered = extract(&marked, &config).unwrap();
//! assert_eq!(recovered, bits);
//! ```

mod pipeline;

pub use pipeline::{embed, embed_batch, extract, extract_batch, watermark_capacity};

// Re-export core types
pub use svdmark_core::{
    BitGrid, BlockGrid, Plane, Sample, Subband, Wavelet, WatermarkConfig, WatermarkError,
    WatermarkResult,
};

// Re-export the lower pipeline stages for callers that compose their own
pub use svdmark_modulation::{decode_bit, embed_bits, extract_bits, update_block};
pub use svdmark_transform::{
    batch_forward_dct, batch_inverse_dct, forward_dct, forward_wavelet, inverse_dct,
    inverse_wavelet, tile, untile, untile_onto, WaveletBands,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
