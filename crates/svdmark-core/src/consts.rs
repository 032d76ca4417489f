//! Protocol constants for the split-modulation coefficient map
//!
//! The eight coefficient positions below are a wire-level contract between
//! embedding and extraction, not derivable logic. Both sides read and write
//! through these two tables; keeping a single definition guarantees the
//! mapping can never drift apart.

/// Positions of the first split-modulation submatrix, row-major:
/// `[[C(2,2), C(0,5)], [C(3,2), C(4,1)]]`
pub const SPLIT_POS_1: [(usize, usize); 4] = [(2, 2), (0, 5), (3, 2), (4, 1)];

/// Positions of the second split-modulation submatrix, row-major:
/// `[[C(1,4), C(2,3)], [C(5,0), C(3,3)]]`
pub const SPLIT_POS_2: [(usize, usize); 4] = [(1, 4), (2, 3), (5, 0), (3, 3)];

/// Smallest block size that can hold the coefficient map (indices go up
/// to row/column 5).
pub const MIN_BLOCK_SIZE: usize = 6;
