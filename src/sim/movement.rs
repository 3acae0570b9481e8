//! All-or-nothing player movement.
//!
//! Forward/backward contributions are summed first, then the candidate is
//! tested once against the grid.  A blocked candidate is dropped for the
//! whole frame: no sliding along walls, no partial step.  Turning is never
//! blocked.

use crate::sim::{HeldKeys, Player, collision::is_blocked};
use crate::world::Grid;

/// Apply one frame of input to `player` and return the new state.
///
/// Translation uses the heading from *before* this frame's turn.
pub fn advance(mut player: Player, keys: HeldKeys, grid: &Grid, tile_size: f32) -> Player {
    /* 1. accumulate displacement */
    let delta = player.forward() * (player.move_speed * keys.forward_axis());

    /* 2. turn unconditionally */
    if keys.contains(HeldKeys::TURN_LEFT) {
        player.angle -= player.turn_speed;
    }
    if keys.contains(HeldKeys::TURN_RIGHT) {
        player.angle += player.turn_speed;
    }

    /* 3. single collision test on the summed move */
    let next = player.pos + delta;
    if is_blocked(grid, tile_size, next.x, next.y) {
        log::trace!(
            "move to ({:.1}, {:.1}) blocked, staying at ({:.1}, {:.1})",
            next.x,
            next.y,
            player.pos.x,
            player.pos.y
        );
    } else {
        player.pos = next;
    }
    player
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
