//! Shared helpers for the example binaries: tracing setup and PNG output.
use std::path::Path;

use anyhow::Context;
use image::{Rgba, RgbaImage};

/// Install a fmt subscriber honoring `RUST_LOG`. Safe to call once per
/// binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Unpack a `0xRRGGBBAA` color into an image pixel.
pub fn unpack_rgba(packed: u32) -> Rgba<u8> {
    Rgba(packed.to_be_bytes())
}

/// Expand a cell-resolution frame into an image, `cell_px` pixels per cell.
pub fn frame_to_image(pixels: &[u32], grid_res: u32, cell_px: u32) -> RgbaImage {
    let side = grid_res * cell_px;
    let mut img = RgbaImage::new(side, side);
    for (x, y, px) in img.enumerate_pixels_mut() {
        let cell = (y / cell_px) * grid_res + (x / cell_px);
        *px = unpack_rgba(pixels[cell as usize]);
    }
    img
}

/// Render a frame buffer to a PNG on disk.
pub fn save_frame_png(
    pixels: &[u32],
    grid_res: u32,
    cell_px: u32,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let path = path.as_ref();
    frame_to_image(pixels, grid_res, cell_px)
        .save(path)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote frame");
    Ok(())
}
