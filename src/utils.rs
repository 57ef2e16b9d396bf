//! Common tools

/// Simple bit ops on a register-sized value
pub(crate) trait BitOps: Sized {
    /// Return a copy with bit `pos` set to `on`
    fn with_bit(self, pos: u8, on: bool) -> Self;

    /// Whether bit `pos` is set
    fn is_set(self, pos: u8) -> bool;
}

impl BitOps for u8 {
    fn with_bit(self, pos: u8, on: bool) -> Self {
        debug_assert!(pos <= 7, "bit offset larger than 7");
        if on {
            self | (1 << pos)
        } else {
            self & !(1 << pos)
        }
    }

    fn is_set(self, pos: u8) -> bool {
        debug_assert!(pos <= 7, "bit offset larger than 7");
        (self >> pos) & 1 == 1
    }
}
