//! Transform engine for blind SVD watermarking
//!
//! This crate implements the frequency transforms the pipeline is built
//! on: an orthonormal 2D DCT over square blocks (single and batched), a
//! single-level 2D Haar wavelet decomposition, and the deterministic
//! block tiling that cuts a subband into the DCT grid.

pub mod dct;
pub mod dwt;
pub mod tiling;

pub use dct::*;
pub use dwt::*;
pub use tiling::*;
