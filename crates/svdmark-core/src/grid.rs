//! Block and bit grids
//!
//! A subband is partitioned into a row-major grid of square blocks; the
//! watermark is a same-shaped grid of bits, one per block.

use crate::{Plane, WatermarkError, WatermarkResult};

/// Row-major grid of equally sized square blocks cut from one subband
#[derive(Debug, Clone, PartialEq)]
pub struct BlockGrid {
    rows: usize,
    cols: usize,
    block_size: usize,
    blocks: Vec<Plane>,
}

impl BlockGrid {
    pub fn from_blocks(
        rows: usize,
        cols: usize,
        block_size: usize,
        blocks: Vec<Plane>,
    ) -> WatermarkResult<Self> {
        if blocks.len() != rows * cols {
            return Err(WatermarkError::InvalidShape(format!(
                "{} blocks do not fill a {}x{} grid",
                blocks.len(),
                rows,
                cols
            )));
        }
        for block in &blocks {
            if block.width() != block_size || block.height() != block_size {
                return Err(WatermarkError::InvalidShape(format!(
                    "block is {}x{}, expected {}x{}",
                    block.height(),
                    block.width(),
                    block_size,
                    block_size
                )));
            }
        }
        Ok(Self {
            rows,
            cols,
            block_size,
            blocks,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn get(&self, row: usize, col: usize) -> &Plane {
        &self.blocks[row * self.cols + col]
    }

    pub fn blocks(&self) -> &[Plane] {
        &self.blocks
    }

    /// Rebuild a grid of the same shape from transformed blocks
    /// (index-matched to this grid)
    pub fn with_blocks(&self, blocks: Vec<Plane>) -> WatermarkResult<Self> {
        Self::from_blocks(self.rows, self.cols, self.block_size, blocks)
    }
}

/// Row-major grid of watermark bits, one per block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitGrid {
    rows: usize,
    cols: usize,
    bits: Vec<bool>,
}

impl BitGrid {
    pub fn from_bits(rows: usize, cols: usize, bits: Vec<bool>) -> WatermarkResult<Self> {
        if bits.len() != rows * cols {
            return Err(WatermarkError::InvalidShape(format!(
                "{} bits do not fill a {}x{} grid",
                bits.len(),
                rows,
                cols
            )));
        }
        Ok(Self { rows, cols, bits })
    }

    pub fn from_fn(rows: usize, cols: usize, f: impl Fn(usize, usize) -> bool) -> Self {
        let mut bits = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                bits.push(f(r, c));
            }
        }
        Self { rows, cols, bits }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        self.bits[row * self.cols + col]
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }
}
