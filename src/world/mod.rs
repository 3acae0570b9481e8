mod grid;

pub use grid::{DEFAULT_MAP, Grid, MAP_HEIGHT, MAP_WIDTH, MapError, Occupancy};
