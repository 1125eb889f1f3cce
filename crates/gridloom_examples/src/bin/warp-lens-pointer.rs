use gridloom::prelude::*;
use gridloom_examples::{init_tracing, save_frame_png};

/// Renders the same instant three ways: untouched, with the scan warp, and
/// with warp plus a pressed pointer lens at the canvas centre.
fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut renderer = FrameRenderer::new(7, &Overrides::new().with_grid_res(128))?;
    let elapsed = renderer.config().period_ms as f64 * 0.42;
    let res = renderer.grid_res();
    let center = res as f32 / 2.0;

    let plain = FrameParams::default();
    let warped = FrameParams::default().with_warp(1.0);
    let lensed = FrameParams::default()
        .with_warp(1.0)
        .with_lens(LensParams::new([center, center], res as f32 * 0.25, 6.0).with_pressed(true));

    for (name, params) in [("plain", plain), ("warp", warped), ("warp-lens", lensed)] {
        let pixels = renderer.render(elapsed, &params).to_vec();
        save_frame_png(&pixels, res, 6, format!("warp-lens-pointer-{name}.png"))?;
    }

    Ok(())
}
