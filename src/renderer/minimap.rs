//! Top-down overlay in the frame's upper-left corner.
//!
//! One fixed ratio ([`Config::minimap_scale`]) maps world units to minimap
//! pixels for both the tiles and the player marker, so the marker always
//! sits inside the tile the player is standing in.

use crate::{
    config::Config,
    renderer::{Renderer, Rgb},
    sim::Player,
    world::{Grid, Occupancy},
};

pub const WALL_COLOUR: Rgb = Rgb(200, 200, 200);
pub const EMPTY_COLOUR: Rgb = Rgb(50, 50, 50);
pub const PLAYER_COLOUR: Rgb = Rgb(255, 0, 0);

pub fn draw_minimap<R: Renderer + ?Sized>(r: &mut R, grid: &Grid, player: &Player, cfg: &Config) {
    let cell = cfg.minimap_cell_px;
    for (cx, cy, occ) in grid.iter_cells() {
        let colour = match occ {
            Occupancy::Wall => WALL_COLOUR,
            Occupancy::Empty => EMPTY_COLOUR,
        };
        r.fill_rect(cx as i32 * cell, cy as i32 * cell, cell, cell, colour);
    }

    let m = cfg.minimap_marker_px;
    let centre = player.pos * cfg.minimap_scale();
    r.fill_rect(
        centre.x as i32 - m / 2,
        centre.y as i32 - m / 2,
        m,
        m,
        PLAYER_COLOUR,
    );
}
