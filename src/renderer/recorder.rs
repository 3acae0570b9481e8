use crate::renderer::{DrawCall, Pixel, Renderer, Rgb};

/// Headless back-end: remembers every call of the current frame instead of
/// rasterising it.
#[derive(Default, Debug)]
pub struct Recorder {
    pub calls: Vec<DrawCall>,
    pub clear: Option<Rgb>,
    pub size: (usize, usize),
    /// Number of completed `end_frame` calls.
    pub frames: usize,
}

impl Recorder {
    pub fn rects(&self) -> impl Iterator<Item = &DrawCall> {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Rect { .. }))
    }

    pub fn vlines(&self) -> impl Iterator<Item = &DrawCall> {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::VLine { .. }))
    }
}

impl Renderer for Recorder {
    fn begin_frame(&mut self, width: usize, height: usize, clear: Rgb) {
        self.calls.clear();
        self.clear = Some(clear);
        self.size = (width, height);
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, colour: Rgb) {
        self.calls.push(DrawCall::Rect { x, y, w, h, colour });
    }

    fn draw_vline(&mut self, x: i32, y0: i32, y1: i32, colour: Rgb) {
        self.calls.push(DrawCall::VLine { x, y0, y1, colour });
    }

    fn end_frame<F, E>(&mut self, submit: F) -> Result<(), E>
    where
        F: FnOnce(&[Pixel], usize, usize) -> Result<(), E>,
    {
        self.frames += 1;
        submit(&[], self.size.0, self.size.1)
    }
}
