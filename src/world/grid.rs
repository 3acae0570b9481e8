//! Fixed-size tile grid: the only map representation the engine knows.
//!
//! Cells are stored row-major as raw codes (`0` = empty, anything else =
//! wall).  Queries outside the grid answer [`Occupancy::Wall`], so the map
//! behaves as if surrounded by solid rock even without an explicit perimeter.

use thiserror::Error;

/// Width of the built-in map in cells.
pub const MAP_WIDTH: usize = 10;
/// Height of the built-in map in cells.
pub const MAP_HEIGHT: usize = 10;

/// Built-in level, row-major, `1` = wall.
#[rustfmt::skip]
pub const DEFAULT_MAP: [u8; MAP_WIDTH * MAP_HEIGHT] = [
    1,1,1,1,1,1,1,1,1,1,
    1,0,1,0,0,0,0,0,0,1,
    1,0,1,0,0,0,0,1,1,1,
    1,0,0,0,0,1,0,1,0,1,
    1,0,0,0,0,0,0,1,0,1,
    1,0,0,0,0,0,0,0,0,1,
    1,0,0,0,1,0,0,0,0,1,
    1,0,0,0,1,0,0,1,0,1,
    1,0,0,0,1,0,0,1,0,1,
    1,1,1,1,1,1,1,1,1,1,
];

/// Answer of an occupancy query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Occupancy {
    Empty,
    Wall,
}

impl Occupancy {
    #[inline]
    pub fn is_wall(self) -> bool {
        self == Occupancy::Wall
    }
}

/// Things that can be wrong with a map handed to [`Grid::new`].
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MapError {
    /// Cell vector length does not match `width × height`.
    #[error("map has {got} cells, expected {expected}")]
    SizeMismatch { expected: usize, got: usize },

    /// Zero width or height.
    #[error("map has no cells")]
    EmptyMap,

    /// A border cell is empty, so rays and the player could leave the map.
    #[error("map border is open at cell ({x}, {y})")]
    OpenBorder { x: usize, y: usize },
}

/// Runtime tile grid (immutable after construction).
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Wrap a row-major cell vector.
    pub fn new(width: usize, height: usize, cells: Vec<u8>) -> Result<Self, MapError> {
        if width == 0 || height == 0 {
            return Err(MapError::EmptyMap);
        }
        let expected = width * height;
        if cells.len() != expected {
            return Err(MapError::SizeMismatch {
                expected,
                got: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// The compiled-in 10×10 level.
    pub fn builtin() -> Self {
        Self {
            width: MAP_WIDTH,
            height: MAP_HEIGHT,
            cells: DEFAULT_MAP.to_vec(),
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw cell code, `None` outside the grid.
    #[inline]
    pub fn cell(&self, cx: i32, cy: i32) -> Option<u8> {
        if cx < 0 || cy < 0 || cx as usize >= self.width || cy as usize >= self.height {
            return None;
        }
        Some(self.cells[cy as usize * self.width + cx as usize])
    }

    /// Total over all integers: anything off the grid is solid.
    #[inline]
    pub fn occupancy(&self, cx: i32, cy: i32) -> Occupancy {
        match self.cell(cx, cy) {
            Some(0) => Occupancy::Empty,
            _ => Occupancy::Wall,
        }
    }

    /// Every cell in row-major order as `(cx, cy, occupancy)`.
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Occupancy)> + '_ {
        self.cells.iter().enumerate().map(|(i, &code)| {
            let occ = if code == 0 {
                Occupancy::Empty
            } else {
                Occupancy::Wall
            };
            (i % self.width, i / self.width, occ)
        })
    }

    /// Check that the outer ring is solid.  Reports the first open cell,
    /// scanning row-major.
    pub fn validate_enclosed(&self) -> Result<(), MapError> {
        let (w, h) = (self.width, self.height);
        let open = self
            .iter_cells()
            .filter(|&(x, y, _)| x == 0 || y == 0 || x == w - 1 || y == h - 1)
            .find(|&(_, _, occ)| !occ.is_wall());
        match open {
            Some((x, y, _)) => Err(MapError::OpenBorder { x, y }),
            None => Ok(()),
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::builtin()
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
