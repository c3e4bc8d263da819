//! Placement of the decorative dots and rings around the agent stack.

/// Rotation period of the inner (clockwise) ring, seconds.
pub const INNER_RING_PERIOD: f64 = 40.0;
/// Rotation period of the outer (counter-clockwise) ring, seconds.
pub const OUTER_RING_PERIOD: f64 = 60.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitNode {
    index: usize,
}

impl OrbitNode {
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    /// Percent from the top of the orbit box; always within 20..=80.
    pub fn top_percent(self) -> f64 {
        20.0 + ((self.index as f64).sin() + 1.0) * 30.0
    }

    /// Percent from the left of the orbit box; always within 20..=80.
    pub fn left_percent(self) -> f64 {
        20.0 + ((self.index as f64).cos() + 1.0) * 30.0
    }

    /// Seconds per glow pulse; later nodes breathe slower so the dots
    /// drift out of phase.
    pub fn pulse_period(self) -> f64 {
        2.0 + self.index as f64 * 0.2
    }

    pub fn position_style(self) -> String {
        format!("top:{:.2}%;left:{:.2}%;", self.top_percent(), self.left_percent())
    }
}
