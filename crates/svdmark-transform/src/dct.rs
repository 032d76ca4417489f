//! Orthonormal 2D DCT over square blocks
//!
//! Separable DCT-II along rows then columns, normalized so the transform
//! is energy-preserving and `inverse_dct(forward_dct(x)) == x` up to
//! floating-point error. Coefficient (0, 0) is the DC term.

use rayon::prelude::*;
use std::f64::consts::PI;
use svdmark_core::{BlockGrid, Plane, WatermarkError, WatermarkResult};

/// 1D orthonormal DCT-II
fn dct_1d(input: &[f64], output: &mut [f64]) {
    let n = input.len();
    let scale0 = (1.0 / n as f64).sqrt();
    let scale = (2.0 / n as f64).sqrt();

    for (k, out) in output.iter_mut().enumerate() {
        let mut sum = 0.0;
        for (i, &x) in input.iter().enumerate() {
            sum += x * (PI * (2 * i + 1) as f64 * k as f64 / (2 * n) as f64).cos();
        }
        *out = sum * if k == 0 { scale0 } else { scale };
    }
}

/// 1D orthonormal DCT-III (inverse of `dct_1d`)
fn idct_1d(input: &[f64], output: &mut [f64]) {
    let n = input.len();
    let scale0 = (1.0 / n as f64).sqrt();
    let scale = (2.0 / n as f64).sqrt();

    for (i, out) in output.iter_mut().enumerate() {
        let mut sum = 0.0;
        for (k, &coeff) in input.iter().enumerate() {
            let s = if k == 0 { scale0 } else { scale };
            sum += s * coeff * (PI * (2 * i + 1) as f64 * k as f64 / (2 * n) as f64).cos();
        }
        *out = sum;
    }
}

fn require_square(block: &Plane) -> WatermarkResult<usize> {
    if !block.is_square() {
        return Err(WatermarkError::InvalidShape(format!(
            "DCT block must be square, got {}x{}",
            block.height(),
            block.width()
        )));
    }
    Ok(block.width())
}

/// Apply the transform along rows, then along columns
fn separable_2d(block: &Plane, transform: fn(&[f64], &mut [f64])) -> WatermarkResult<Plane> {
    let n = require_square(block)?;

    let mut rows_done = Plane::new(n, n);
    let mut line = vec![0.0; n];
    let mut out_line = vec![0.0; n];

    for r in 0..n {
        for c in 0..n {
            line[c] = block.get(r, c);
        }
        transform(&line, &mut out_line);
        for c in 0..n {
            rows_done.set(r, c, out_line[c]);
        }
    }

    let mut result = Plane::new(n, n);
    for c in 0..n {
        for r in 0..n {
            line[r] = rows_done.get(r, c);
        }
        transform(&line, &mut out_line);
        for r in 0..n {
            result.set(r, c, out_line[r]);
        }
    }

    Ok(result)
}

/// Forward orthonormal 2D DCT of one square block
pub fn forward_dct(block: &Plane) -> WatermarkResult<Plane> {
    separable_2d(block, dct_1d)
}

/// Inverse orthonormal 2D DCT of one square coefficient block
pub fn inverse_dct(coeffs: &Plane) -> WatermarkResult<Plane> {
    separable_2d(coeffs, idct_1d)
}

/// Forward DCT of every block in a grid. Blocks are independent, so the
/// work is distributed across the rayon pool; the output grid is
/// index-matched to the input regardless of completion order.
pub fn batch_forward_dct(grid: &BlockGrid) -> WatermarkResult<BlockGrid> {
    let blocks = grid
        .blocks()
        .par_iter()
        .map(forward_dct)
        .collect::<WatermarkResult<Vec<_>>>()?;
    grid.with_blocks(blocks)
}

/// Inverse DCT of every block in a grid
pub fn batch_inverse_dct(grid: &BlockGrid) -> WatermarkResult<BlockGrid> {
    let blocks = grid
        .blocks()
        .par_iter()
        .map(inverse_dct)
        .collect::<WatermarkResult<Vec<_>>>()?;
    grid.with_blocks(blocks)
}
