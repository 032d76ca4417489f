//! Single-level 2D Haar wavelet decomposition
//!
//! The Haar pair `(a+b)/√2, (a-b)/√2` is applied along rows and then
//! columns, splitting the image into four half-size subbands. Both
//! directions use the same normalization, so reconstruction is exact up
//! to floating-point error.

use std::f64::consts::SQRT_2;
use svdmark_core::{Plane, Subband, Wavelet, WatermarkError, WatermarkResult};

/// The four subbands of one decomposition level
#[derive(Debug, Clone, PartialEq)]
pub struct WaveletBands {
    /// Approximation (low/low)
    pub ll: Plane,
    /// Horizontal detail (low/high)
    pub lh: Plane,
    /// Vertical detail (high/low)
    pub hl: Plane,
    /// Diagonal detail (high/high)
    pub hh: Plane,
}

impl WaveletBands {
    pub fn subband(&self, which: Subband) -> &Plane {
        match which {
            Subband::Ll => &self.ll,
            Subband::Lh => &self.lh,
            Subband::Hl => &self.hl,
            Subband::Hh => &self.hh,
        }
    }

    /// Replace one subband, keeping the other three
    pub fn with_subband(&self, which: Subband, plane: Plane) -> WatermarkResult<Self> {
        let current = self.subband(which);
        if plane.width() != current.width() || plane.height() != current.height() {
            return Err(WatermarkError::InvalidShape(format!(
                "replacement subband is {}x{}, expected {}x{}",
                plane.height(),
                plane.width(),
                current.height(),
                current.width()
            )));
        }
        let mut bands = self.clone();
        match which {
            Subband::Ll => bands.ll = plane,
            Subband::Lh => bands.lh = plane,
            Subband::Hl => bands.hl = plane,
            Subband::Hh => bands.hh = plane,
        }
        Ok(bands)
    }
}

/// Single-level forward 2D DWT.
///
/// Both image dimensions must be even; the Haar pair has no defined
/// partner for a trailing sample, and padding here would desynchronize
/// embed and extract, so odd shapes are rejected outright.
pub fn forward_wavelet(image: &Plane, wavelet: Wavelet) -> WatermarkResult<WaveletBands> {
    match wavelet {
        Wavelet::Haar => forward_haar(image),
    }
}

/// Single-level inverse 2D DWT, exact reconstruction
pub fn inverse_wavelet(bands: &WaveletBands, wavelet: Wavelet) -> WatermarkResult<Plane> {
    match wavelet {
        Wavelet::Haar => inverse_haar(bands),
    }
}

fn forward_haar(image: &Plane) -> WatermarkResult<WaveletBands> {
    let (w, h) = (image.width(), image.height());
    if w % 2 != 0 || h % 2 != 0 {
        return Err(WatermarkError::InvalidShape(format!(
            "Haar DWT requires even dimensions, got {}x{}",
            h, w
        )));
    }
    let (hw, hh_dim) = (w / 2, h / 2);

    // Rows first: left half low-pass, right half high-pass
    let mut rows = Plane::new(w, h);
    for r in 0..h {
        for c in 0..hw {
            let a = image.get(r, 2 * c);
            let b = image.get(r, 2 * c + 1);
            rows.set(r, c, (a + b) / SQRT_2);
            rows.set(r, hw + c, (a - b) / SQRT_2);
        }
    }

    let mut ll = Plane::new(hw, hh_dim);
    let mut lh = Plane::new(hw, hh_dim);
    let mut hl = Plane::new(hw, hh_dim);
    let mut hh = Plane::new(hw, hh_dim);
    for r in 0..hh_dim {
        for c in 0..hw {
            let (a_lo, b_lo) = (rows.get(2 * r, c), rows.get(2 * r + 1, c));
            let (a_hi, b_hi) = (rows.get(2 * r, hw + c), rows.get(2 * r + 1, hw + c));
            ll.set(r, c, (a_lo + b_lo) / SQRT_2);
            hl.set(r, c, (a_lo - b_lo) / SQRT_2);
            lh.set(r, c, (a_hi + b_hi) / SQRT_2);
            hh.set(r, c, (a_hi - b_hi) / SQRT_2);
        }
    }

    Ok(WaveletBands { ll, lh, hl, hh })
}

fn inverse_haar(bands: &WaveletBands) -> WatermarkResult<Plane> {
    let (hw, hh_dim) = (bands.ll.width(), bands.ll.height());
    for band in [&bands.lh, &bands.hl, &bands.hh] {
        if band.width() != hw || band.height() != hh_dim {
            return Err(WatermarkError::InvalidShape(format!(
                "subband shapes disagree: {}x{} vs {}x{}",
                band.height(),
                band.width(),
                hh_dim,
                hw
            )));
        }
    }
    let (w, h) = (hw * 2, hh_dim * 2);

    // Undo the column transform
    let mut rows = Plane::new(w, h);
    for r in 0..hh_dim {
        for c in 0..hw {
            let (lo, hi) = (bands.ll.get(r, c), bands.hl.get(r, c));
            rows.set(2 * r, c, (lo + hi) / SQRT_2);
            rows.set(2 * r + 1, c, (lo - hi) / SQRT_2);
            let (lo, hi) = (bands.lh.get(r, c), bands.hh.get(r, c));
            rows.set(2 * r, hw + c, (lo + hi) / SQRT_2);
            rows.set(2 * r + 1, hw + c, (lo - hi) / SQRT_2);
        }
    }

    // Undo the row transform
    let mut image = Plane::new(w, h);
    for r in 0..h {
        for c in 0..hw {
            let (lo, hi) = (rows.get(r, c), rows.get(r, hw + c));
            image.set(r, 2 * c, (lo + hi) / SQRT_2);
            image.set(r, 2 * c + 1, (lo - hi) / SQRT_2);
        }
    }

    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_image(w: usize, h: usize) -> Plane {
        Plane::from_fn(w, h, |r, c| ((r * 31 + c * 17) % 256) as f64)
    }

    #[test]
    fn test_haar_roundtrip() {
        let image = test_image(16, 12);
        let bands = forward_wavelet(&image, Wavelet::Haar).unwrap();
        let restored = inverse_wavelet(&bands, Wavelet::Haar).unwrap();
        assert!(image.max_abs_diff(&restored) < 1e-10);
    }

    #[test]
    fn test_haar_subband_shapes() {
        let image = test_image(20, 14);
        let bands = forward_wavelet(&image, Wavelet::Haar).unwrap();
        for which in [Subband::Ll, Subband::Lh, Subband::Hl, Subband::Hh] {
            let band = bands.subband(which);
            assert_eq!(band.width(), 10);
            assert_eq!(band.height(), 7);
        }
    }

    #[test]
    fn test_haar_rejects_odd_dimensions() {
        for (w, h) in [(15, 16), (16, 15)] {
            let err = forward_wavelet(&test_image(w, h), Wavelet::Haar).unwrap_err();
            assert!(matches!(err, WatermarkError::InvalidShape(_)));
        }
    }

    #[test]
    fn test_ll_of_constant_image_is_scaled_constant() {
        // Two /sqrt(2) low-pass steps scale a constant region by 2
        let image = Plane::from_fn(8, 8, |_, _| 5.0);
        let bands = forward_wavelet(&image, Wavelet::Haar).unwrap();
        for r in 0..4 {
            for c in 0..4 {
                assert!((bands.ll.get(r, c) - 10.0).abs() < 1e-12);
                assert!(bands.hh.get(r, c).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_with_subband_rejects_wrong_shape() {
        let bands = forward_wavelet(&test_image(16, 16), Wavelet::Haar).unwrap();
        let err = bands.with_subband(Subband::Ll, Plane::new(4, 4)).unwrap_err();
        assert!(matches!(err, WatermarkError::InvalidShape(_)));
    }
}
