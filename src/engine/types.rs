/// Constants that depend on the *frame-buffer*, not on the map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Screen {
    pub w: usize,
    pub h: usize,
    pub half_w: f32, // pre-derived for speed
    pub half_h: f32, // pre-derived for speed
}

impl Screen {
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            half_w: w as f32 * 0.5,
            half_h: h as f32 * 0.5,
        }
    }
}

/// One column's ray: distance to the first solid sample and the absolute
/// angle it was cast at.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RayHit {
    pub distance: f32,
    pub angle: f32,
}

/// Vertical wall slice for one screen column.
/// `top ..= bottom` are screen rows; `brightness` is the gray level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slice {
    pub top: i32,
    pub bottom: i32,
    pub brightness: u8,
}
