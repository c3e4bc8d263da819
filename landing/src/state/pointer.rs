//! Pointer position relative to the hero container.

/// Offset in CSS pixels from a container's top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerOffset {
    pub x: f64,
    pub y: f64,
}

/// Container rectangle in viewport coordinates, as returned by
/// `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PointerOffset {
    pub const ORIGIN: PointerOffset = PointerOffset { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Translate a viewport point into `bounds` and clamp it to the box, so
    /// subpixel rounding at the edges never places the glow outside.
    pub fn within(client_x: f64, client_y: f64, bounds: Bounds) -> Self {
        Self {
            x: (client_x - bounds.left).clamp(0.0, bounds.width.max(0.0)),
            y: (client_y - bounds.top).clamp(0.0, bounds.height.max(0.0)),
        }
    }

    /// `left`/`top` declarations for the glow layer.
    pub fn position_style(self) -> String {
        format!("left:{:.1}px;top:{:.1}px;", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HERO: Bounds = Bounds {
        left: 0.0,
        top: 80.0,
        width: 1280.0,
        height: 720.0,
    };

    #[test]
    fn relative_to_top_left() {
        assert_eq!(PointerOffset::within(300.0, 180.0, HERO), PointerOffset::new(300.0, 100.0));
    }

    #[test]
    fn corner_maps_to_origin() {
        assert_eq!(PointerOffset::within(0.0, 80.0, HERO), PointerOffset::ORIGIN);
    }

    #[test]
    fn always_inside_bounds() {
        let samples = [(-5.0, 79.5), (1280.4, 800.2), (640.0, 440.0), (1281.0, 10.0)];
        for (cx, cy) in samples {
            let p = PointerOffset::within(cx, cy, HERO);
            assert!((0.0..=HERO.width).contains(&p.x), "{:?}", p);
            assert!((0.0..=HERO.height).contains(&p.y), "{:?}", p);
        }
    }

    #[test]
    fn style_uses_pixels() {
        assert_eq!(PointerOffset::new(12.0, 7.5).position_style(), "left:12.0px;top:7.5px;");
    }
}
