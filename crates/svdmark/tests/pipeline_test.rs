//! Integration tests for the full embed/extract pipeline

use svdmark::{
    embed, embed_batch, extract, extract_batch, watermark_capacity, BitGrid, Plane, Subband,
    WatermarkConfig, WatermarkError,
};

/// Deterministic textured test image (simple LCG noise over a gradient)
fn test_image(width: usize, height: usize) -> Plane {
    let mut state: u32 = 0x2545_f491;
    let mut noise = vec![0.0; width * height];
    for v in noise.iter_mut() {
        state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        *v = (state >> 24) as f64;
    }
    Plane::from_fn(width, height, |r, c| {
        let base = ((r * 3 + c * 2) % 128) as f64 + 64.0;
        0.75 * base + 0.25 * noise[r * width + c]
    })
}

fn checkerboard_bits(rows: usize, cols: usize) -> BitGrid {
    BitGrid::from_fn(rows, cols, |r, c| (r + c) % 2 == 0)
}

#[test]
fn test_full_pipeline_roundtrip() {
    let image = test_image(32, 32);
    let config = WatermarkConfig::new(8, Subband::Ll, 3.0);

    let (rows, cols) = watermark_capacity(32, 32, &config).unwrap();
    assert_eq!((rows, cols), (2, 2));

    let bits = checkerboard_bits(rows, cols);
    let marked = embed(&image, &bits, &config).unwrap();
    let recovered = extract(&marked, &config).unwrap();
    assert_eq!(recovered, bits);
}

#[test]
fn test_minimal_image_single_block() {
    // 16x16 image -> 8x8 subband -> a single 8x8 block
    let image = test_image(16, 16);
    let config = WatermarkConfig::new(8, Subband::Ll, 2.0);
    assert_eq!(watermark_capacity(16, 16, &config).unwrap(), (1, 1));

    for bit in [true, false] {
        let bits = BitGrid::from_fn(1, 1, |_, _| bit);
        let marked = embed(&image, &bits, &config).unwrap();
        assert_eq!(extract(&marked, &config).unwrap().get(0, 0), bit);
    }
}

#[test]
fn test_roundtrip_every_subband() {
    let image = test_image(48, 48);
    for subband in [Subband::Ll, Subband::Lh, Subband::Hl, Subband::Hh] {
        let config = WatermarkConfig::new(8, subband, 3.0);
        let (rows, cols) = watermark_capacity(48, 48, &config).unwrap();
        let bits = BitGrid::from_fn(rows, cols, |r, c| (r * 5 + c * 3) % 3 == 0);
        let marked = embed(&image, &bits, &config).unwrap();
        assert_eq!(
            extract(&marked, &config).unwrap(),
            bits,
            "roundtrip failed in {:?}",
            subband
        );
    }
}

#[test]
fn test_roundtrip_non_divisible_subband() {
    // 44x44 image -> 22x22 subband, block 8 -> 2x2 grid with remainder
    let image = test_image(44, 44);
    let config = WatermarkConfig::new(8, Subband::Ll, 3.0);
    let (rows, cols) = watermark_capacity(44, 44, &config).unwrap();
    assert_eq!((rows, cols), (2, 2));

    let bits = checkerboard_bits(rows, cols);
    let marked = embed(&image, &bits, &config).unwrap();
    assert_eq!(extract(&marked, &config).unwrap(), bits);
}

#[test]
fn test_embedding_distortion_is_local() {
    // Embedding rewrites eight mid-frequency coefficients per block; the
    // watermarked image must stay the same size and broadly similar.
    let image = test_image(32, 32);
    let config = WatermarkConfig::new(8, Subband::Ll, 1.5);
    let bits = checkerboard_bits(2, 2);
    let marked = embed(&image, &bits, &config).unwrap();

    assert_eq!(marked.width(), 32);
    assert_eq!(marked.height(), 32);
    assert!(marked.max_abs_diff(&image) > 0.0, "embedding changed nothing");

    let mse: f64 = image
        .as_slice()
        .iter()
        .zip(marked.as_slice())
        .map(|(a, b)| (a - b) * (a - b))
        .sum::<f64>()
        / (32.0 * 32.0);
    assert!(mse < 2000.0, "embedding distortion too large: mse = {}", mse);
}

#[test]
fn test_extraction_survives_f32_storage() {
    // Store the marked image as f32 samples and extract from the
    // re-widened copy; the ordering margin dwarfs the rounding error.
    let image = test_image(32, 32);
    let config = WatermarkConfig::new(8, Subband::Ll, 3.0);
    let bits = checkerboard_bits(2, 2);
    let marked = embed(&image, &bits, &config).unwrap();

    let stored: Vec<f32> = marked.to_samples();
    let reloaded = Plane::from_samples(32, 32, &stored).unwrap();
    assert_eq!(extract(&reloaded, &config).unwrap(), bits);
}

#[test]
fn test_alpha_below_one_inverts_decoded_bits() {
    // alpha in (0, 1) embeds the opposite singular-value ordering, so
    // extraction returns the exact complement of the embedded grid.
    let image = test_image(32, 32);
    let config = WatermarkConfig::new(8, Subband::Ll, 0.5);
    let bits = checkerboard_bits(2, 2);
    let marked = embed(&image, &bits, &config).unwrap();
    let recovered = extract(&marked, &config).unwrap();
    let complement = BitGrid::from_fn(2, 2, |r, c| !bits.get(r, c));
    assert_eq!(recovered, complement);
}

#[test]
fn test_embed_is_deterministic() {
    let image = test_image(32, 32);
    let config = WatermarkConfig::new(8, Subband::Hl, 2.0);
    let bits = checkerboard_bits(2, 2);
    let first = embed(&image, &bits, &config).unwrap();
    let second = embed(&image, &bits, &config).unwrap();
    assert_eq!(first, second);

    let e1 = extract(&first, &config).unwrap();
    let e2 = extract(&first, &config).unwrap();
    assert_eq!(e1, e2);
}

#[test]
fn test_embed_rejects_wrong_bit_grid_shape() {
    let image = test_image(32, 32);
    let config = WatermarkConfig::new(8, Subband::Ll, 2.0);
    let bits = checkerboard_bits(3, 2);
    assert_eq!(
        embed(&image, &bits, &config).unwrap_err(),
        WatermarkError::ShapeMismatch {
            bit_rows: 3,
            bit_cols: 2,
            grid_rows: 2,
            grid_cols: 2,
        }
    );
}

#[test]
fn test_embed_rejects_odd_image() {
    let image = test_image(31, 32);
    let config = WatermarkConfig::default();
    let bits = checkerboard_bits(1, 1);
    assert!(matches!(
        embed(&image, &bits, &config).unwrap_err(),
        WatermarkError::InvalidShape(_)
    ));
}

#[test]
fn test_invalid_alpha_rejected_at_entry() {
    let image = test_image(32, 32);
    let bits = checkerboard_bits(2, 2);
    for alpha in [1.0, 0.0, -2.0] {
        let config = WatermarkConfig::new(8, Subband::Ll, alpha);
        assert!(matches!(
            embed(&image, &bits, &config).unwrap_err(),
            WatermarkError::InvalidConfig(_)
        ));
        assert!(matches!(
            extract(&image, &config).unwrap_err(),
            WatermarkError::InvalidConfig(_)
        ));
    }
}

#[test]
fn test_image_too_small_for_one_block() {
    let image = test_image(8, 8); // 4x4 subband cannot hold an 8x8 block
    let config = WatermarkConfig::default();
    assert!(matches!(
        watermark_capacity(8, 8, &config).unwrap_err(),
        WatermarkError::InvalidShape(_)
    ));
}

#[test]
fn test_batch_roundtrip() {
    let images: Vec<Plane> = vec![test_image(32, 32), test_image(48, 32), test_image(32, 48)];
    let config = WatermarkConfig::new(8, Subband::Ll, 3.0);

    let bit_grids: Vec<BitGrid> = images
        .iter()
        .enumerate()
        .map(|(i, img)| {
            let (rows, cols) =
                watermark_capacity(img.width(), img.height(), &config).unwrap();
            BitGrid::from_fn(rows, cols, move |r, c| (r + c + i) % 2 == 0)
        })
        .collect();

    let marked = embed_batch(&images, &bit_grids, &config).unwrap();
    assert_eq!(marked.len(), images.len());

    let recovered = extract_batch(&marked, &config).unwrap();
    assert_eq!(recovered, bit_grids);
}

#[test]
fn test_batch_length_mismatch_rejected() {
    let images = vec![test_image(32, 32)];
    let config = WatermarkConfig::default();
    assert!(matches!(
        embed_batch(&images, &[], &config).unwrap_err(),
        WatermarkError::InvalidShape(_)
    ));
}
