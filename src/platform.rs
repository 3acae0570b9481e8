//! Window-system seam.
//!
//! The engine needs three things from the outside world each frame: the
//! held movement keys, whether to stop, and somewhere to put the finished
//! pixels.  `minifb` provides them in the binary; tests script them.

use crate::{renderer::Pixel, sim::HeldKeys};

pub trait Platform {
    type Error;

    /// Snapshot of the movement keys for this frame.
    fn held_keys(&mut self) -> HeldKeys;

    /// Polled once per loop iteration, before input is read.
    fn quit_requested(&self) -> bool;

    /// Show a finished `width × height` frame.
    fn present(&mut self, frame: &[Pixel], width: usize, height: usize)
    -> Result<(), Self::Error>;
}
