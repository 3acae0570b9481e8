//! World-space point vs. tile grid test.
//!
//! Floors rather than truncates, so `-0.5` lands in cell `-1` (solid)
//! instead of cell `0`.

use glam::{IVec2, Vec2};

use crate::world::Grid;

/// Grid cell containing world point `p`.
#[inline]
pub fn world_to_cell(p: Vec2, tile_size: f32) -> IVec2 {
    let c = (p / tile_size).floor();
    // `as` saturates, NaN maps to 0
    IVec2::new(c.x as i32, c.y as i32)
}

/// `true` if the cell containing `(x, y)` is a wall (or off the map).
#[inline]
pub fn is_blocked(grid: &Grid, tile_size: f32, x: f32, y: f32) -> bool {
    let c = world_to_cell(Vec2::new(x, y), tile_size);
    grid.occupancy(c.x, c.y).is_wall()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TILE: f32 = 100.0;

    #[test]
    fn cell_conversion_floors() {
        assert_eq!(world_to_cell(Vec2::new(150.0, 250.0), TILE), IVec2::new(1, 2));
        assert_eq!(world_to_cell(Vec2::new(100.0, 99.99), TILE), IVec2::new(1, 0));
        assert_eq!(world_to_cell(Vec2::new(-0.5, 10.0), TILE), IVec2::new(-1, 0));
    }

    #[test]
    fn probes_against_builtin_map() {
        let g = Grid::builtin();
        assert!(is_blocked(&g, TILE, 50.0, 50.0)); // border
        assert!(!is_blocked(&g, TILE, 150.0, 150.0)); // cell (1,1)
        assert!(is_blocked(&g, TILE, 250.0, 150.0)); // cell (2,1)
        assert!(!is_blocked(&g, TILE, 300.0, 300.0)); // spawn
    }

    #[test]
    fn negative_and_far_points_are_blocked() {
        let g = Grid::new(1, 1, vec![0]).unwrap();
        assert!(!is_blocked(&g, TILE, 0.0, 0.0));
        assert!(is_blocked(&g, TILE, -0.01, 50.0));
        assert!(is_blocked(&g, TILE, 100.0, 50.0));
        assert!(is_blocked(&g, TILE, 1.0e30, 1.0e30));
    }
}
