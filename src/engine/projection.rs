//! Distance → screen-slice maths.
//!
//! Every step is a plain scalar function so it can be tested without a
//! frame-buffer; [`Projector`] just bundles them with the screen and tile
//! constants.

use crate::engine::types::{Screen, Slice};

/// Added to the corrected distance before dividing.
pub const DEPTH_EPSILON: f32 = 1e-4;
/// Darkest gray a wall is ever drawn with.
pub const MIN_BRIGHTNESS: u8 = 50;

/// Project the radial distance onto the view axis (removes fisheye).
#[inline]
pub fn corrected_distance(distance: f32, ray_angle: f32, player_angle: f32) -> f32 {
    distance * (ray_angle - player_angle).cos()
}

/// On-screen wall height in pixels, never taller than the screen.
#[inline]
pub fn slice_height(corrected: f32, tile_size: f32, screen_h: f32) -> f32 {
    ((tile_size * screen_h) / (corrected + DEPTH_EPSILON)).min(screen_h)
}

/// Gray level for a wall at `corrected` distance: 255 at the eye, half a
/// level darker per world unit, floored at [`MIN_BRIGHTNESS`].
#[inline]
pub fn brightness(corrected: f32) -> u8 {
    let shade = 255 - (corrected * 0.5) as i32;
    shade.clamp(MIN_BRIGHTNESS as i32, 255) as u8
}

/// Screen-space projection for one frame-buffer size.
#[derive(Clone, Copy, Debug)]
pub struct Projector {
    pub screen: Screen,
    pub tile_size: f32,
}

impl Projector {
    pub fn new(screen: Screen, tile_size: f32) -> Self {
        Self { screen, tile_size }
    }

    /// Vertical slice for a ray that travelled `distance` at `ray_angle`.
    pub fn project(&self, distance: f32, ray_angle: f32, player_angle: f32) -> Slice {
        let corrected = corrected_distance(distance, ray_angle, player_angle);
        let height = slice_height(corrected, self.tile_size, self.screen.h as f32);

        // centred on the horizon; rows truncate like the pixel grid does
        let top = (self.screen.half_h - height * 0.5) as i32;
        let bottom = (top as f32 + height) as i32;

        Slice {
            top,
            bottom,
            brightness: brightness(corrected),
        }
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;

    fn projector() -> Projector {
        Projector::new(Screen::new(600, 600), 100.0)
    }

    #[test]
    fn no_correction_on_the_view_axis() {
        assert_eq!(corrected_distance(123.0, 0.7, 0.7), 123.0);
    }

    #[test]
    fn correction_shrinks_off_axis() {
        let c = corrected_distance(100.0, 0.25, 0.0);
        assert!((c - 100.0 * 0.25f32.cos()).abs() < 1e-4);
        assert!(c < 100.0);
    }

    #[test]
    fn height_is_clamped_to_screen() {
        assert_eq!(slice_height(0.0, 100.0, 600.0), 600.0);
        assert_eq!(slice_height(50.0, 100.0, 600.0), 600.0);
        assert!((slice_height(200.0, 100.0, 600.0) - 300.0).abs() < 1e-2);
    }

    #[test]
    fn brightness_floor_and_ceiling() {
        assert_eq!(brightness(0.0), 255);
        assert_eq!(brightness(10.3), 250);
        assert_eq!(brightness(200.0), 155);
        assert_eq!(brightness(410.0), 50);
        assert_eq!(brightness(10_000.0), 50);
    }

    #[test]
    fn slice_is_centred() {
        let s = projector().project(200.0, 0.0, 0.0);
        assert_eq!(s.top, 150);
        assert_eq!(s.bottom, 449);
        assert_eq!(s.brightness, 155);
    }

    #[test]
    fn adjacent_wall_fills_column() {
        let s = projector().project(0.5, 0.1, 0.1);
        assert_eq!(s.top, 0);
        assert_eq!(s.bottom, 600);
        assert_eq!(s.brightness, 255);
    }
}
