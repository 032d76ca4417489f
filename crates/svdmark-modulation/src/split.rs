//! Split-modulation coefficient mapping
//!
//! Gathers and scatters the eight protocol coefficient positions
//! (`SPLIT_POS_1` / `SPLIT_POS_2` in svdmark-core) between a DCT block
//! and two row-major 2x2 submatrices.

use svdmark_core::consts::{MIN_BLOCK_SIZE, SPLIT_POS_1, SPLIT_POS_2};
use svdmark_core::{Plane, WatermarkError, WatermarkResult};

/// Row-major 2x2 submatrix
pub type SubMatrix = [f64; 4];

fn check_block(block: &Plane) -> WatermarkResult<()> {
    if !block.is_square() {
        return Err(WatermarkError::InvalidShape(format!(
            "coefficient block must be square, got {}x{}",
            block.height(),
            block.width()
        )));
    }
    if block.width() < MIN_BLOCK_SIZE {
        return Err(WatermarkError::BlockTooSmall {
            size: block.width(),
            min: MIN_BLOCK_SIZE,
        });
    }
    Ok(())
}

/// Read the two split-modulation submatrices out of a DCT block
pub fn extract_submatrices(block: &Plane) -> WatermarkResult<(SubMatrix, SubMatrix)> {
    check_block(block)?;
    let mut sub1 = [0.0; 4];
    let mut sub2 = [0.0; 4];
    for i in 0..4 {
        let (r1, c1) = SPLIT_POS_1[i];
        let (r2, c2) = SPLIT_POS_2[i];
        sub1[i] = block.get(r1, c1);
        sub2[i] = block.get(r2, c2);
    }
    Ok((sub1, sub2))
}

/// Write two submatrices back into a copy of a DCT block. Only the eight
/// mapped coefficients change.
pub fn write_submatrices(
    block: &Plane,
    sub1: &SubMatrix,
    sub2: &SubMatrix,
) -> WatermarkResult<Plane> {
    check_block(block)?;
    let mut updated = block.clone();
    for i in 0..4 {
        let (r1, c1) = SPLIT_POS_1[i];
        let (r2, c2) = SPLIT_POS_2[i];
        updated.set(r1, c1, sub1[i]);
        updated.set(r2, c2, sub2[i]);
    }
    Ok(updated)
}
