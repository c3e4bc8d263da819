//! Viewport-enter latch: flips once, never back.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealLatch {
    #[default]
    Pending,
    Revealed,
}

impl RevealLatch {
    /// Feed one intersection observation. Returns `true` only on the
    /// observation that reveals.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if *self == RevealLatch::Pending && intersecting {
            *self = RevealLatch::Revealed;
            return true;
        }
        false
    }
}
