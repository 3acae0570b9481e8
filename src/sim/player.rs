use glam::Vec2;

use crate::config::Config;

/// Player view-point in world space.
///
/// * `angle` is in radians, 0 = +X, growing towards +Y (screen-down), so
///   a positive turn is a turn to the right on screen.
/// * Speeds are per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub angle: f32,
    pub move_speed: f32,
    pub turn_speed: f32,
}

impl Player {
    pub fn new(pos: Vec2, angle: f32, move_speed: f32, turn_speed: f32) -> Self {
        Self {
            pos,
            angle,
            move_speed,
            turn_speed,
        }
    }

    /// Spawn point, heading and speeds taken from `cfg`.
    pub fn from_config(cfg: &Config) -> Self {
        Self::new(
            Vec2::new(cfg.spawn.0, cfg.spawn.1),
            cfg.spawn_angle,
            cfg.move_speed,
            cfg.turn_speed,
        )
    }

    /// Unit vector along the current heading.
    #[inline(always)]
    pub fn forward(&self) -> Vec2 {
        Vec2::from_angle(self.angle)
    }
}
