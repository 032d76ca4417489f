//! Core types and utilities for blind SVD watermarking
//!
//! This crate provides the fundamental data structures shared by the
//! watermarking pipeline: plane and grid buffers, sample conversion,
//! subband/wavelet selection, configuration, and error types.

pub mod config;
pub mod consts;
pub mod error;
pub mod grid;
pub mod plane;
pub mod types;

pub use config::WatermarkConfig;
pub use error::{WatermarkError, WatermarkResult};
pub use grid::*;
pub use plane::*;
pub use types::*;
