use bitflags::bitflags;

bitflags! {
    /// Movement keys held during the current frame.
    ///
    /// Keyed by logical action, not by physical key; the platform layer
    /// decides which keys map to which bit.
    #[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
    pub struct HeldKeys: u8 {
        const FORWARD    = 0b0001;
        const BACKWARD   = 0b0010;
        const TURN_LEFT  = 0b0100;
        const TURN_RIGHT = 0b1000;
    }
}

impl HeldKeys {
    /// Net forward intent: +1, -1 or 0 when both or neither are held.
    #[inline]
    pub fn forward_axis(self) -> f32 {
        let mut f = 0.0;
        if self.contains(HeldKeys::FORWARD) {
            f += 1.0;
        }
        if self.contains(HeldKeys::BACKWARD) {
            f -= 1.0;
        }
        f
    }

    /// Net turn intent: +1 = right (angle grows), -1 = left.
    #[inline]
    pub fn turn_axis(self) -> f32 {
        let mut t = 0.0;
        if self.contains(HeldKeys::TURN_RIGHT) {
            t += 1.0;
        }
        if self.contains(HeldKeys::TURN_LEFT) {
            t -= 1.0;
        }
        t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_keys_cancel() {
        let k = HeldKeys::FORWARD | HeldKeys::BACKWARD;
        assert_eq!(k.forward_axis(), 0.0);
        let k = HeldKeys::TURN_LEFT | HeldKeys::TURN_RIGHT;
        assert_eq!(k.turn_axis(), 0.0);
    }

    #[test]
    fn single_keys() {
        assert_eq!(HeldKeys::FORWARD.forward_axis(), 1.0);
        assert_eq!(HeldKeys::BACKWARD.forward_axis(), -1.0);
        assert_eq!(HeldKeys::TURN_LEFT.turn_axis(), -1.0);
        assert_eq!(HeldKeys::TURN_RIGHT.turn_axis(), 1.0);
        assert_eq!(HeldKeys::empty().forward_axis(), 0.0);
    }
}
