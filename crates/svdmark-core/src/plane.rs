//! 2D sample buffers

use crate::{Sample, WatermarkError, WatermarkResult};

/// A 2D array of f64 samples in row-major order. Used for full images,
/// wavelet subbands and individual blocks alike.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

impl Plane {
    /// Create a zero-filled plane
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; width * height],
        }
    }

    /// Create a plane from an existing row-major buffer
    pub fn from_vec(width: usize, height: usize, data: Vec<f64>) -> WatermarkResult<Self> {
        if data.len() != width * height {
            return Err(WatermarkError::InvalidShape(format!(
                "buffer of length {} does not match {}x{} plane",
                data.len(),
                width,
                height
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a plane by evaluating `f(row, col)` at every position
    pub fn from_fn(width: usize, height: usize, f: impl Fn(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                data.push(f(y, x));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Convert a row-major slice of samples into an f64 plane
    pub fn from_samples<S: Sample>(
        width: usize,
        height: usize,
        samples: &[S],
    ) -> WatermarkResult<Self> {
        if samples.len() != width * height {
            return Err(WatermarkError::InvalidShape(format!(
                "sample buffer of length {} does not match {}x{} plane",
                samples.len(),
                width,
                height
            )));
        }
        // Qualified call: NumCast's ToPrimitive supertrait also has a
        // to_f64 method, which would shadow the infallible one here.
        let data = samples.iter().map(|s| Sample::to_f64(*s)).collect();
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Convert the plane back to a row-major sample buffer
    pub fn to_samples<S: Sample>(&self) -> Vec<S> {
        self.data.iter().map(|&v| S::from_f64(v)).collect()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        debug_assert!(row < self.height && col < self.width);
        self.data[row * self.width + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        debug_assert!(row < self.height && col < self.width);
        self.data[row * self.width + col] = value;
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Maximum absolute difference to another plane of the same shape
    pub fn max_abs_diff(&self, other: &Plane) -> f64 {
        assert_eq!(self.width, other.width);
        assert_eq!(self.height, other.height);
        self.data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }
}
