use gridloom::prelude::*;
use gridloom_examples::{init_tracing, save_frame_png};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // A handful of seeds with distinct dominant rules.
    for seed in [0u32, 7, 42, 128, 200] {
        let mut renderer = FrameRenderer::new(seed, &Overrides::default())?;
        let params = FrameParams::default();

        let quarter = renderer.config().period_ms as f64 / 4.0;
        let pixels = renderer.render(quarter, &params).to_vec();

        tracing::info!(
            seed,
            grid_res = renderer.grid_res(),
            regions = renderer.regions().len(),
            calm = renderer.config().calm,
            "rendered variant"
        );
        save_frame_png(
            &pixels,
            renderer.grid_res(),
            8,
            format!("frames-single-seed-{seed}.png"),
        )?;
    }

    Ok(())
}
