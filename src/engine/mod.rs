mod engine;
mod projection;
mod raycast;
mod types;

use thiserror::Error;

use crate::world::MapError;

pub use engine::Engine;
pub use projection::{
    DEPTH_EPSILON, MIN_BRIGHTNESS, Projector, brightness, corrected_distance, slice_height,
};
pub use raycast::{RayCaster, ray_angle};
pub use types::{RayHit, Screen, Slice};

/// Reasons [`Engine::new`] refuses to start.
#[derive(Error, Debug, PartialEq)]
pub enum EngineError {
    #[error(transparent)]
    Map(#[from] MapError),

    /// Spawn point lies inside a wall or off the grid.
    #[error("player spawn ({x}, {y}) is inside a wall")]
    SpawnInWall { x: f32, y: f32 },

    #[error("bad config: {0}")]
    BadConfig(&'static str),
}
