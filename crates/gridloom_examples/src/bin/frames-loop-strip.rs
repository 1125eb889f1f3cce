use gridloom::prelude::*;
use gridloom_examples::{frame_to_image, init_tracing};
use image::RgbaImage;

const FRAMES: u32 = 8;
const CELL_PX: u32 = 4;

/// Renders one loop of a variant as a horizontal strip of frames. The first
/// and last columns sample t = 0 and t = 1, which must be identical.
fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut renderer = FrameRenderer::new(42, &Overrides::new().with_grid_res(96))?;
    let params = FrameParams::default().with_warp(0.5);
    let period = renderer.config().period_ms as f64;

    let side = renderer.grid_res() * CELL_PX;
    let mut strip = RgbaImage::new(side * (FRAMES + 1), side);

    let mut first_frame = Vec::new();
    for i in 0..=FRAMES {
        let elapsed = period * i as f64 / FRAMES as f64;
        let pixels = renderer.render(elapsed, &params).to_vec();

        if i == 0 {
            first_frame = pixels.clone();
        }
        if i == FRAMES {
            anyhow::ensure!(pixels == first_frame, "loop endpoints must agree");
            tracing::info!("loop endpoints agree, the strip closes seamlessly");
        }

        let tile = frame_to_image(&pixels, renderer.grid_res(), CELL_PX);
        image::imageops::overlay(&mut strip, &tile, (i * side) as i64, 0);
    }

    strip.save("frames-loop-strip.png")?;
    tracing::info!("wrote frames-loop-strip.png");
    Ok(())
}
