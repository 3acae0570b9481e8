mod collision;
mod input;
mod movement;
mod player;

pub use collision::{is_blocked, world_to_cell};
pub use input::HeldKeys;
pub use movement::advance;
pub use player::Player;
