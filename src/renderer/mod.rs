//! Rendering abstraction layer.
//!
//! *The engine never touches a pixel buffer directly.*
//! It issues two primitives, filled rectangles and vertical lines, to a
//! type that implements [`Renderer`], then hands the finished frame to the
//! platform through `end_frame`.
//!
//! * [`Software`] rasterises into a `0x00RRGGBB` buffer for `minifb`.
//! * [`Recorder`] keeps the calls as a list of [`DrawCall`]s; it is the
//!   headless back-end used by tests.

mod minimap;
mod recorder;
mod software;
mod view;

pub use minimap::{EMPTY_COLOUR, PLAYER_COLOUR, WALL_COLOUR, draw_minimap};
pub use recorder::Recorder;
pub use software::Software;
pub use view::draw_view;

/// Pixel format of the software frame-buffer (0x00RRGGBB).
pub type Pixel = u32;

/// Opaque 8-bit-per-channel colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Same level on all three channels.
    #[inline]
    pub const fn gray(v: u8) -> Self {
        Rgb(v, v, v)
    }

    #[inline]
    pub const fn to_pixel(self) -> Pixel {
        ((self.0 as u32) << 16) | ((self.1 as u32) << 8) | self.2 as u32
    }
}

/// Frame clear colour.
pub const BACKGROUND: Rgb = Rgb(30, 30, 30);

/// One recorded draw primitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawCall {
    Rect {
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        colour: Rgb,
    },
    VLine {
        x: i32,
        y0: i32,
        y1: i32,
        colour: Rgb,
    },
}

/// A renderer that owns whatever scratch it needs for the whole frame.
///
/// `end_frame` hands the finished buffer to a caller-supplied closure.
/// Back-ends without a CPU buffer call it with an empty slice.
pub trait Renderer {
    /// (Re)allocate for the requested resolution and clear to `clear`.
    fn begin_frame(&mut self, width: usize, height: usize, clear: Rgb);

    /// Filled axis-aligned rectangle, clipped to the frame.
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, colour: Rgb);

    /// Column `x` from row `y0` to row `y1` inclusive, clipped to the frame.
    fn draw_vline(&mut self, x: i32, y0: i32, y1: i32, colour: Rgb);

    /// Finish the frame and **loan** the finished buffer to `submit`.
    ///
    /// `submit` is run exactly once per frame; its error is passed through.
    fn end_frame<F, E>(&mut self, submit: F) -> Result<(), E>
    where
        F: FnOnce(&[Pixel], usize, usize) -> Result<(), E>;
}

/// Convenience blanket-impl to replay recorded calls.
pub trait RendererExt: Renderer {
    fn draw_calls(&mut self, calls: &[DrawCall]) {
        for c in calls {
            match *c {
                DrawCall::Rect { x, y, w, h, colour } => self.fill_rect(x, y, w, h, colour),
                DrawCall::VLine { x, y0, y1, colour } => self.draw_vline(x, y0, y1, colour),
            }
        }
    }
}
impl<T: Renderer + ?Sized> RendererExt for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_packing() {
        assert_eq!(Rgb(0x12, 0x34, 0x56).to_pixel(), 0x00_123456);
        assert_eq!(Rgb::gray(200), Rgb(200, 200, 200));
    }
}
