//! Split modulation and SVD bit coding
//!
//! A watermark bit is carried by the relative ordering of the largest
//! singular values of two fixed 2x2 submatrices of a DCT block. This
//! crate implements the coefficient mapping, the singular-value rewrite
//! that forces the ordering, and the per-grid orchestration of both.

pub mod grid;
pub mod split;
pub mod svd;

pub use grid::*;
pub use split::*;
pub use svd::*;
