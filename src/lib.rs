//! Grid raycaster: a first-person view of a 2-D tile map, one ray per
//! screen column.
//!
//! * [`world`]    – the tile grid.
//! * [`sim`]      – player state, held keys, collision and movement.
//! * [`engine`]   – ray casting, projection and the frame loop.
//! * [`renderer`] – draw primitives and the software / headless back-ends.
//! * [`platform`] – input, quit and present, supplied by the window system.

pub mod config;
pub mod engine;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod world;
