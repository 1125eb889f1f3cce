use gridloom::prelude::*;
use gridloom_examples::{frame_to_image, init_tracing};
use image::RgbaImage;

const COLS: u32 = 4;
const ROWS: u32 = 4;
const CELL_PX: u32 = 2;

/// Contact sheet: one thumbnail per seed, with the derived layout logged.
fn main() -> anyhow::Result<()> {
    init_tracing();

    // Fix the grid so tiles line up; everything else derives per seed.
    let overrides = Overrides::new().with_grid_res(96);
    let side = 96 * CELL_PX;
    let mut sheet = RgbaImage::new(COLS * side, ROWS * side);

    for seed in 0..COLS * ROWS {
        let mut renderer = FrameRenderer::new(seed, &overrides)?;
        let config = renderer.config();
        let rules: Vec<&str> = config.active_rules.iter().map(|r| r.as_str()).collect();
        tracing::info!(
            seed,
            calm = config.calm,
            period_ms = config.period_ms,
            events = config.events.len(),
            ?rules,
            "variant"
        );

        let elapsed = config.period_ms as f64 * 0.3;
        let pixels = renderer.render(elapsed, &FrameParams::default()).to_vec();
        let tile = frame_to_image(&pixels, renderer.grid_res(), CELL_PX);
        let (col, row) = (seed % COLS, seed / COLS);
        image::imageops::overlay(&mut sheet, &tile, (col * side) as i64, (row * side) as i64);
    }

    sheet.save("variants-seed-sweep.png")?;
    tracing::info!("wrote variants-seed-sweep.png");
    Ok(())
}
