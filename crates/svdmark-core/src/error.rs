//! Error types for watermarking operations

use thiserror::Error;

/// Result type for watermarking operations
pub type WatermarkResult<T> = Result<T, WatermarkError>;

/// Errors that can occur during watermark embedding/extraction
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WatermarkError {
    #[error("Invalid shape: {0}")]
    InvalidShape(String),

    #[error("Block size {size} too small for the coefficient map (minimum {min})")]
    BlockTooSmall { size: usize, min: usize },

    #[error("Shape mismatch: bit grid is {bit_rows}x{bit_cols}, block grid is {grid_rows}x{grid_cols}")]
    ShapeMismatch {
        bit_rows: usize,
        bit_cols: usize,
        grid_rows: usize,
        grid_cols: usize,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
