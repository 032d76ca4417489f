//! SVD modulation engine
//!
//! Each submatrix is decomposed as `U * diag(S) * V^T`. Embedding forces
//! the two largest singular values apart around their mean, in a
//! direction keyed by the watermark bit; extraction recovers the bit by
//! comparing the two maxima.

use nalgebra::{Matrix2, Vector2};
use svdmark_core::{Plane, WatermarkError, WatermarkResult};

use crate::split::{extract_submatrices, write_submatrices, SubMatrix};

/// Full SVD of a 2x2 submatrix, returning (U, S, V^T)
pub fn decompose(m: &SubMatrix) -> (Matrix2<f64>, Vector2<f64>, Matrix2<f64>) {
    let svd = Matrix2::from_row_slice(m).svd(true, true);
    // u and v_t are always present when requested
    let u = svd.u.expect("SVD computed with u");
    let v_t = svd.v_t.expect("SVD computed with v_t");
    (u, svd.singular_values, v_t)
}

/// `U * diag(S) * V^T` back to a row-major submatrix
pub fn reconstruct(u: &Matrix2<f64>, s: &Vector2<f64>, v_t: &Matrix2<f64>) -> SubMatrix {
    let m = u * Matrix2::from_diagonal(s) * v_t;
    [m[(0, 0)], m[(0, 1)], m[(1, 0)], m[(1, 1)]]
}

/// Index of the largest entry, first occurrence on ties.
///
/// SVD routines conventionally sort singular values descending, but the
/// rewrite must not depend on any particular routine's contract, so the
/// maximum is located explicitly.
fn argmax(s: &Vector2<f64>) -> usize {
    if s[1] > s[0] {
        1
    } else {
        0
    }
}

/// Rewrite the largest singular value of each submatrix around their
/// shared mean: bit 1 pushes `S1` above `S2`, bit 0 the reverse. All
/// other entries are untouched.
pub fn modulate(
    s1: &Vector2<f64>,
    s2: &Vector2<f64>,
    bit: bool,
    alpha: f64,
) -> (Vector2<f64>, Vector2<f64>) {
    let i1 = argmax(s1);
    let i2 = argmax(s2);
    let mean_e = (s1[i1] + s2[i2]) / 2.0;

    let mut out1 = *s1;
    let mut out2 = *s2;
    if bit {
        out1[i1] = mean_e * alpha;
        out2[i2] = mean_e / alpha;
    } else {
        out1[i1] = mean_e / alpha;
        out2[i2] = mean_e * alpha;
    }
    (out1, out2)
}

fn check_alpha(alpha: f64) -> WatermarkResult<()> {
    if alpha <= 0.0 {
        return Err(WatermarkError::InvalidConfig(format!(
            "alpha must be positive, got {}",
            alpha
        )));
    }
    if alpha == 1.0 {
        return Err(WatermarkError::InvalidConfig(
            "alpha == 1 makes the embedded bit unrecoverable".into(),
        ));
    }
    Ok(())
}

/// Embed one bit into a DCT coefficient block.
///
/// Pure function of its inputs: the block is copied, the two submatrices
/// are decomposed, modulated and reconstructed, and the eight mapped
/// coefficients are written back.
pub fn update_block(block: &Plane, bit: bool, alpha: f64) -> WatermarkResult<Plane> {
    check_alpha(alpha)?;
    let (sub1, sub2) = extract_submatrices(block)?;

    let (u1, s1, v1_t) = decompose(&sub1);
    let (u2, s2, v2_t) = decompose(&sub2);

    let (new_s1, new_s2) = modulate(&s1, &s2, bit, alpha);

    let new_sub1 = reconstruct(&u1, &new_s1, &v1_t);
    let new_sub2 = reconstruct(&u2, &new_s2, &v2_t);

    write_submatrices(block, &new_sub1, &new_sub2)
}

/// Recover one bit from a DCT coefficient block.
///
/// Ties decode as bit 1; the `>=` comparison is part of the protocol and
/// must match the embedder exactly.
pub fn decode_bit(block: &Plane) -> WatermarkResult<bool> {
    let (sub1, sub2) = extract_submatrices(block)?;
    let (_, s1, _) = decompose(&sub1);
    let (_, s2, _) = decompose(&sub2);
    let ls1 = s1[argmax(&s1)];
    let ls2 = s2[argmax(&s2)];
    Ok(ls1 >= ls2)
}
