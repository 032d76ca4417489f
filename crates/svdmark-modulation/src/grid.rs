//! Block-grid orchestration
//!
//! Every block is processed independently; the rayon maps below collect
//! in input order, so sequential and parallel runs produce bitwise
//! identical grids.

use rayon::prelude::*;
use svdmark_core::{BitGrid, BlockGrid, WatermarkError, WatermarkResult};

use crate::svd::{decode_bit, update_block};

/// Embed one bit per block across a grid of DCT coefficient blocks.
///
/// The bit grid must have exactly the block grid's shape; a mismatch is
/// rejected before any block is touched.
pub fn embed_bits(
    grid: &BlockGrid,
    bits: &BitGrid,
    alpha: f64,
) -> WatermarkResult<BlockGrid> {
    if bits.rows() != grid.rows() || bits.cols() != grid.cols() {
        return Err(WatermarkError::ShapeMismatch {
            bit_rows: bits.rows(),
            bit_cols: bits.cols(),
            grid_rows: grid.rows(),
            grid_cols: grid.cols(),
        });
    }

    let blocks = grid
        .blocks()
        .par_iter()
        .zip(bits.bits().par_iter())
        .map(|(block, &bit)| update_block(block, bit, alpha))
        .collect::<WatermarkResult<Vec<_>>>()?;
    grid.with_blocks(blocks)
}

/// Recover one bit per block from a grid of DCT coefficient blocks
pub fn extract_bits(grid: &BlockGrid) -> WatermarkResult<BitGrid> {
    let bits = grid
        .blocks()
        .par_iter()
        .map(decode_bit)
        .collect::<WatermarkResult<Vec<_>>>()?;
    BitGrid::from_bits(grid.rows(), grid.cols(), bits)
}
