//! Deterministic block tiling of a subband
//!
//! The grid shape is fixed by floor division: a `h x w` subband tiled
//! with blocks of side `k` yields `(h / k) x (w / k)` blocks, row-major,
//! starting at the top-left corner. Remainder rows and columns are
//! cropped from the grid and pass through the pipeline untouched via
//! `untile_onto`. The same policy runs on embed and extract, so the two
//! grids always align one-to-one.

use svdmark_core::{BlockGrid, Plane, WatermarkError, WatermarkResult};

/// Grid shape produced by tiling a `height x width` subband with blocks
/// of side `block_size`
pub fn grid_shape(
    width: usize,
    height: usize,
    block_size: usize,
) -> WatermarkResult<(usize, usize)> {
    let rows = height / block_size;
    let cols = width / block_size;
    if rows == 0 || cols == 0 {
        return Err(WatermarkError::InvalidShape(format!(
            "subband {}x{} is smaller than one {}x{} block",
            height, width, block_size, block_size
        )));
    }
    Ok((rows, cols))
}

/// Cut a subband into non-overlapping square blocks
pub fn tile(subband: &Plane, block_size: usize) -> WatermarkResult<BlockGrid> {
    let (rows, cols) = grid_shape(subband.width(), subband.height(), block_size)?;

    let mut blocks = Vec::with_capacity(rows * cols);
    for br in 0..rows {
        for bc in 0..cols {
            let block = Plane::from_fn(block_size, block_size, |r, c| {
                subband.get(br * block_size + r, bc * block_size + c)
            });
            blocks.push(block);
        }
    }
    BlockGrid::from_blocks(rows, cols, block_size, blocks)
}

/// Reassemble the covered region of a grid into one plane
pub fn untile(grid: &BlockGrid) -> WatermarkResult<Plane> {
    let k = grid.block_size();
    let mut plane = Plane::new(grid.cols() * k, grid.rows() * k);
    for br in 0..grid.rows() {
        for bc in 0..grid.cols() {
            let block = grid.get(br, bc);
            for r in 0..k {
                for c in 0..k {
                    plane.set(br * k + r, bc * k + c, block.get(r, c));
                }
            }
        }
    }
    Ok(plane)
}

/// Scatter a grid back over a copy of the original subband.
///
/// Cropped remainder strips keep their original samples, so the result
/// has the exact shape the inverse wavelet expects.
pub fn untile_onto(grid: &BlockGrid, original: &Plane) -> WatermarkResult<Plane> {
    let k = grid.block_size();
    let (rows, cols) = grid_shape(original.width(), original.height(), k)?;
    if rows != grid.rows() || cols != grid.cols() {
        return Err(WatermarkError::InvalidShape(format!(
            "grid is {}x{} blocks but subband tiles into {}x{}",
            grid.rows(),
            grid.cols(),
            rows,
            cols
        )));
    }

    let mut plane = original.clone();
    for br in 0..rows {
        for bc in 0..cols {
            let block = grid.get(br, bc);
            for r in 0..k {
                for c in 0..k {
                    plane.set(br * k + r, bc * k + c, block.get(r, c));
                }
            }
        }
    }
    Ok(plane)
}
