//! ---------------------------------------------------------------------------
//! CPU frame-buffer back-end
//!
//! * Fills a `Vec<u32>` in **0x00RRGGBB** format, row-major.
//! * Every primitive is clipped to the frame, so callers may pass slices
//!   that run past the screen edge (the projector does for nearby walls).
//! ---------------------------------------------------------------------------

use crate::renderer::{Pixel, Renderer, Rgb};

#[derive(Default)]
pub struct Software {
    scratch: Vec<Pixel>,
    width: usize,
    height: usize,
}

impl Software {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            scratch: vec![0; width * height],
            width,
            height,
        }
    }

    /// Current frame contents.
    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.scratch
    }

    /// Pixel at `(x, y)`, `None` outside the frame.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Pixel> {
        (x < self.width && y < self.height).then(|| self.scratch[y * self.width + x])
    }

    /// Clamp a half-open span `[lo, hi)` to `[0, limit)`.
    #[inline]
    fn clip(lo: i32, hi: i32, limit: usize) -> Option<(usize, usize)> {
        let lo = lo.max(0);
        let hi = hi.min(limit as i32);
        (lo < hi).then_some((lo as usize, hi as usize))
    }
}

/*──────────────────────── Renderer trait impl ────────────────────────*/
impl Renderer for Software {
    fn begin_frame(&mut self, w: usize, h: usize, clear: Rgb) {
        // (re)allocate if resolution changed
        if w != self.width || h != self.height {
            self.width = w;
            self.height = h;
            self.scratch.resize(w * h, 0);
        }
        self.scratch.fill(clear.to_pixel());
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, colour: Rgb) {
        let Some((x0, x1)) = Self::clip(x, x.saturating_add(w), self.width) else {
            return;
        };
        let Some((y0, y1)) = Self::clip(y, y.saturating_add(h), self.height) else {
            return;
        };
        let px = colour.to_pixel();
        for row in y0..y1 {
            let start = row * self.width;
            self.scratch[start + x0..start + x1].fill(px);
        }
    }

    fn draw_vline(&mut self, x: i32, y0: i32, y1: i32, colour: Rgb) {
        if x < 0 || x as usize >= self.width {
            return;
        }
        let (lo, hi) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        let Some((top, bot)) = Self::clip(lo, hi.saturating_add(1), self.height) else {
            return;
        };
        let px = colour.to_pixel();
        let col = x as usize;
        for row in top..bot {
            self.scratch[row * self.width + col] = px;
        }
    }

    fn end_frame<F, E>(&mut self, submit: F) -> Result<(), E>
    where
        F: FnOnce(&[Pixel], usize, usize) -> Result<(), E>,
    {
        submit(&self.scratch, self.width, self.height)
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCall, RendererExt};
    use std::convert::Infallible;

    const BLUE: Rgb = Rgb(0, 0, 255);
    const BG: Rgb = Rgb(1, 2, 3);

    #[test]
    fn clear_fills_frame() {
        let mut sw = Software::default();
        sw.begin_frame(4, 3, BG);
        assert_eq!(sw.pixels().len(), 12);
        assert!(sw.pixels().iter().all(|&p| p == BG.to_pixel()));
    }

    #[test]
    fn rect_is_clipped() {
        let mut sw = Software::new(8, 8);
        sw.begin_frame(8, 8, BG);
        sw.fill_rect(-2, 6, 4, 10, BLUE);
        let blue: Vec<_> = (0..8)
            .flat_map(|y| (0..8).map(move |x| (x, y)))
            .filter(|&(x, y)| sw.pixel(x, y) == Some(BLUE.to_pixel()))
            .collect();
        assert_eq!(blue, vec![(0, 6), (1, 6), (0, 7), (1, 7)]);
    }

    #[test]
    fn vline_is_inclusive_and_clipped() {
        let mut sw = Software::new(4, 10);
        sw.begin_frame(4, 10, BG);
        sw.draw_vline(2, 7, 20, BLUE);
        for y in 0..10 {
            let want = if y >= 7 { BLUE } else { BG };
            assert_eq!(sw.pixel(2, y), Some(want.to_pixel()), "row {y}");
        }
        sw.draw_vline(-1, 0, 9, BLUE);
        sw.draw_vline(4, 0, 9, BLUE);
        assert_eq!(sw.pixel(0, 0), Some(BG.to_pixel()));
        assert_eq!(sw.pixel(3, 0), Some(BG.to_pixel()));
    }

    #[test]
    fn replayed_calls_match_direct_draws() {
        let calls = [
            DrawCall::Rect {
                x: 1,
                y: 1,
                w: 2,
                h: 2,
                colour: BLUE,
            },
            DrawCall::VLine {
                x: 5,
                y0: 0,
                y1: 3,
                colour: Rgb::gray(9),
            },
        ];
        let mut a = Software::new(8, 8);
        a.begin_frame(8, 8, BG);
        a.draw_calls(&calls);

        let mut b = Software::new(8, 8);
        b.begin_frame(8, 8, BG);
        b.fill_rect(1, 1, 2, 2, BLUE);
        b.draw_vline(5, 0, 3, Rgb::gray(9));

        assert_eq!(a.pixels(), b.pixels());
    }

    #[test]
    fn end_frame_loans_buffer() {
        let mut sw = Software::default();
        sw.begin_frame(2, 2, BG);
        let mut seen = (0, 0, 0);
        sw.end_frame(|fb, w, h| {
            seen = (fb.len(), w, h);
            Ok::<(), Infallible>(())
        })
        .unwrap();
        assert_eq!(seen, (4, 2, 2));
    }
}
