//! Tuning constants shared by the simulation and the renderer.
//!
//! Everything here is fixed at start-up; the binary only ever uses
//! [`Config::default`].  Speeds are per *frame*, not per second.

use std::f32::consts::PI;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Frame-buffer width in pixels; also the number of rays per frame.
    pub screen_w: usize,
    /// Frame-buffer height in pixels.
    pub screen_h: usize,
    /// World units per grid cell.
    pub tile_size: f32,
    /// Horizontal field of view in degrees.
    pub fov_deg: f32,
    /// World units moved per frame while forward/backward is held.
    pub move_speed: f32,
    /// Radians turned per frame while a turn key is held.
    pub turn_speed: f32,
    /// March increment of the ray caster in world units.
    pub ray_step: f32,
    /// Minimap pixels per grid cell.
    pub minimap_cell_px: i32,
    /// Side of the player marker on the minimap, in pixels.
    pub minimap_marker_px: i32,
    /// Player spawn in world units.
    pub spawn: (f32, f32),
    /// Player spawn heading in radians (0 = +X).
    pub spawn_angle: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_w: 600,
            screen_h: 600,
            tile_size: 100.0,
            fov_deg: 30.0,
            move_speed: 5.0,
            turn_speed: PI / 180.0,
            ray_step: 0.5,
            minimap_cell_px: 10,
            minimap_marker_px: 4,
            spawn: (300.0, 300.0),
            spawn_angle: 0.0,
        }
    }
}

impl Config {
    #[inline]
    pub fn fov(&self) -> f32 {
        self.fov_deg.to_radians()
    }

    /// World units → minimap pixels.
    #[inline]
    pub fn minimap_scale(&self) -> f32 {
        self.minimap_cell_px as f32 / self.tile_size
    }

    /// Reject values the engine maths cannot work with.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.screen_w == 0 || self.screen_h == 0 {
            return Err("screen size must be non-zero");
        }
        if !(self.tile_size > 0.0) {
            return Err("tile size must be positive");
        }
        if !(self.ray_step > 0.0) {
            return Err("ray step must be positive");
        }
        if self.ray_step > self.tile_size {
            return Err("ray step must not exceed the tile size");
        }
        if !(self.fov_deg > 0.0 && self.fov_deg < 180.0) {
            return Err("field of view must be in (0, 180) degrees");
        }
        Ok(())
    }
}
