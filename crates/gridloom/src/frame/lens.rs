//! Local pointer lens: radial pixel remapping around a pointer position.
use glam::Vec2;
use mint::Vector2;

/// Lens parameters, in grid-cell coordinates.
#[derive(Clone, Copy, Debug)]
pub struct LensParams {
    /// Pointer position.
    pub position: Vector2<f32>,
    /// Effect radius in cells.
    pub radius: f32,
    /// Displacement at the pointer, in cells, before falloff.
    pub strength: f32,
    /// Pressed inverts the displacement direction: released pulls the
    /// image toward the pointer, pressed pushes it away.
    pub pressed: bool,
}

impl LensParams {
    pub fn new(position: impl Into<Vector2<f32>>, radius: f32, strength: f32) -> Self {
        Self {
            position: position.into(),
            radius,
            strength,
            pressed: false,
        }
    }

    pub fn with_pressed(mut self, pressed: bool) -> Self {
        self.pressed = pressed;
        self
    }
}

/// Source coordinate for the output pixel `(x, y)` under the lens.
///
/// Pixels outside the radius map to themselves. Displaced coordinates are
/// clamped to the buffer edges, never wrapped.
pub(crate) fn source_coord(x: u32, y: u32, width: u32, height: u32, lens: &LensParams) -> (u32, u32) {
    let p = Vec2::from(lens.position);
    let here = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
    let delta = here - p;
    let dist = delta.length();

    if dist >= lens.radius || dist < f32::EPSILON || lens.radius <= 0.0 {
        return (x, y);
    }

    let falloff = (1.0 - dist / lens.radius).powi(2);
    let amount = lens.strength * falloff * if lens.pressed { -1.0 } else { 1.0 };
    let src = here + (delta / dist) * amount;

    let sx = (src.x.floor()).clamp(0.0, (width - 1) as f32) as u32;
    let sy = (src.y.floor()).clamp(0.0, (height - 1) as f32) as u32;
    (sx, sy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outside_radius_is_identity() {
        let lens = LensParams::new([8.0f32, 8.0], 4.0, 3.0);
        assert_eq!(source_coord(0, 0, 16, 16, &lens), (0, 0));
        assert_eq!(source_coord(15, 15, 16, 16, &lens), (15, 15));
    }

    #[test]
    fn center_pixel_is_fixed() {
        let lens = LensParams::new([8.5f32, 8.5], 6.0, 3.0);
        assert_eq!(source_coord(8, 8, 16, 16, &lens), (8, 8));
    }

    #[test]
    fn displaced_coords_stay_in_bounds() {
        let lens = LensParams::new([2.0f32, 2.0], 20.0, 50.0).with_pressed(true);
        for y in 0..16u32 {
            for x in 0..16u32 {
                let (sx, sy) = source_coord(x, y, 16, 16, &lens);
                assert!(sx < 16 && sy < 16);
            }
        }
        let lens = LensParams::new([2.0f32, 2.0], 20.0, 50.0);
        for y in 0..16u32 {
            for x in 0..16u32 {
                let (sx, sy) = source_coord(x, y, 16, 16, &lens);
                assert!(sx < 16 && sy < 16);
            }
        }
    }

    #[test]
    fn press_state_flips_direction() {
        let pull = LensParams::new([8.0f32, 8.0], 8.0, 2.0);
        let push = pull.with_pressed(true);
        // A pixel right of the pointer: pulling samples further right,
        // pushing samples back toward the pointer.
        let (pull_x, _) = source_coord(10, 8, 32, 32, &pull);
        let (push_x, _) = source_coord(10, 8, 32, 32, &push);
        assert!(pull_x > 10);
        assert!(push_x <= 10);
    }
}
