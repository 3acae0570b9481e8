//! Fixed-step ray march, one ray per screen column.
//!
//! Rays are sampled every `ray_step` world units until a sample lands in a
//! solid cell.  This is *not* a DDA walk: accuracy is bounded by the step,
//! and a wall thinner than one step could be skipped, which is why
//! [`Config::validate`](crate::config::Config::validate) keeps the step at
//! or below the tile size.
//!
//! Off-grid samples are solid, so every ray that starts inside the grid
//! stops within one map diagonal.  The march is still capped at that many
//! steps so a non-finite origin or angle cannot spin forever.

use glam::Vec2;

use crate::{
    engine::types::RayHit,
    sim::{Player, is_blocked},
    world::Grid,
};

/// Angle of the ray for screen column `column` out of `columns`,
/// sweeping left to right across `fov` centred on `player_angle`.
#[inline]
pub fn ray_angle(column: usize, columns: usize, player_angle: f32, fov: f32) -> f32 {
    player_angle - fov * 0.5 + column as f32 * (fov / columns as f32)
}

/// Ray marcher bound to one grid.
pub struct RayCaster<'a> {
    grid: &'a Grid,
    tile_size: f32,
    step: f32,
    max_steps: u32,
}

impl<'a> RayCaster<'a> {
    pub fn new(grid: &'a Grid, tile_size: f32, step: f32) -> Self {
        let diag = Vec2::new(
            grid.width() as f32 * tile_size,
            grid.height() as f32 * tile_size,
        )
        .length();
        Self {
            grid,
            tile_size,
            step,
            max_steps: (diag / step).ceil() as u32 + 1,
        }
    }

    /// Upper bound on samples per ray.
    #[inline]
    pub fn max_steps(&self) -> u32 {
        self.max_steps
    }

    /// Distance from `origin` to the first solid sample along `angle`.
    ///
    /// Returns 0 when `origin` itself is inside a wall.
    pub fn cast(&self, origin: Vec2, angle: f32) -> f32 {
        let dir = Vec2::from_angle(angle) * self.step;
        let mut p = origin;
        let mut n = 0u32;
        while !is_blocked(self.grid, self.tile_size, p.x, p.y) {
            if n == self.max_steps {
                log::debug!("ray at {angle:.4} rad hit the step cap");
                break;
            }
            n += 1;
            p = origin + dir * n as f32;
        }
        p.distance(origin)
    }

    /// Cast every column of a `columns`-wide view into `out` (cleared first).
    pub fn cast_all(&self, player: &Player, fov: f32, columns: usize, out: &mut Vec<RayHit>) {
        out.clear();
        out.extend((0..columns).map(|r| {
            let angle = ray_angle(r, columns, player.angle, fov);
            RayHit {
                distance: self.cast(player.pos, angle),
                angle,
            }
        }));
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
