//! End-to-end embed/extract pipeline

use rayon::prelude::*;
use svdmark_core::{BitGrid, Plane, WatermarkConfig, WatermarkError, WatermarkResult};
use svdmark_modulation::{embed_bits, extract_bits};
use svdmark_transform::{
    batch_forward_dct, batch_inverse_dct, forward_wavelet, grid_shape, inverse_wavelet, tile,
    untile_onto,
};

/// Block-grid shape implied by an image size and configuration, i.e. the
/// shape the watermark bit grid must have.
pub fn watermark_capacity(
    width: usize,
    height: usize,
    config: &WatermarkConfig,
) -> WatermarkResult<(usize, usize)> {
    config.validate()?;
    if width % 2 != 0 || height % 2 != 0 {
        return Err(WatermarkError::InvalidShape(format!(
            "image dimensions must be even, got {}x{}",
            height, width
        )));
    }
    grid_shape(width / 2, height / 2, config.block_size)
}

/// Embed a bit grid into an image, returning the watermarked image.
///
/// The bit grid shape must equal `watermark_capacity` for the image and
/// configuration; anything else is a `ShapeMismatch`.
pub fn embed(
    image: &Plane,
    bits: &BitGrid,
    config: &WatermarkConfig,
) -> WatermarkResult<Plane> {
    config.validate()?;

    let bands = forward_wavelet(image, config.wavelet)?;
    let subband = bands.subband(config.subband);

    let grid = tile(subband, config.block_size)?;
    let coeff_grid = batch_forward_dct(&grid)?;
    let modulated = embed_bits(&coeff_grid, bits, config.alpha)?;
    let spatial = batch_inverse_dct(&modulated)?;

    let new_subband = untile_onto(&spatial, subband)?;
    let new_bands = bands.with_subband(config.subband, new_subband)?;
    inverse_wavelet(&new_bands, config.wavelet)
}

/// Recover the bit grid from a watermarked image
pub fn extract(image: &Plane, config: &WatermarkConfig) -> WatermarkResult<BitGrid> {
    config.validate()?;

    let bands = forward_wavelet(image, config.wavelet)?;
    let subband = bands.subband(config.subband);

    let grid = tile(subband, config.block_size)?;
    let coeff_grid = batch_forward_dct(&grid)?;
    extract_bits(&coeff_grid)
}

/// Embed one bit grid per image across a batch. Images are independent
/// and processed in parallel; outputs are index-matched to inputs.
pub fn embed_batch(
    images: &[Plane],
    bit_grids: &[BitGrid],
    config: &WatermarkConfig,
) -> WatermarkResult<Vec<Plane>> {
    if images.len() != bit_grids.len() {
        return Err(WatermarkError::InvalidShape(format!(
            "batch of {} images with {} bit grids",
            images.len(),
            bit_grids.len()
        )));
    }
    images
        .par_iter()
        .zip(bit_grids.par_iter())
        .map(|(image, bits)| embed(image, bits, config))
        .collect()
}

/// Extract one bit grid per image across a batch
pub fn extract_batch(
    images: &[Plane],
    config: &WatermarkConfig,
) -> WatermarkResult<Vec<BitGrid>> {
    images.par_iter().map(|image| extract(image, config)).collect()
}
