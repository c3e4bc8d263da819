//! One-shot entrance animations rendered as inline CSS.
//!
//! The `enter` keyframes in `style/landing.css` read the start offsets from
//! custom properties, so every element shares one animation and only the
//! variables differ. Nodes are created once, so the animation plays once.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entrance {
    /// Seconds before the element starts moving
    pub delay: f64,
    /// Seconds the fade/slide takes
    pub duration: f64,
    pub from_x: f64,
    pub from_y: f64,
    pub from_scale: f64,
    /// Opacity the element settles at
    pub to_opacity: f64,
}

impl Entrance {
    /// Fade in while rising `from_y` pixels.
    pub const fn rise(delay: f64, duration: f64, from_y: f64) -> Self {
        Self {
            delay,
            duration,
            from_x: 0.0,
            from_y,
            from_scale: 1.0,
            to_opacity: 1.0,
        }
    }

    /// Fade in while sliding in from `from_x` pixels to the left/right.
    pub const fn slide(delay: f64, duration: f64, from_x: f64) -> Self {
        Self {
            delay,
            duration,
            from_x,
            from_y: 0.0,
            from_scale: 1.0,
            to_opacity: 1.0,
        }
    }

    pub const fn with_scale(mut self, from_scale: f64) -> Self {
        self.from_scale = from_scale;
        self
    }

    pub const fn with_opacity(mut self, to_opacity: f64) -> Self {
        self.to_opacity = to_opacity;
        self
    }

    /// Delay of the `index`-th element of a staggered group.
    pub fn stagger(base: f64, step: f64, index: usize) -> f64 {
        base + step * index as f64
    }

    pub fn style(&self) -> String {
        let mut style = format!(
            "--enter-x:{}px;--enter-y:{}px;--enter-scale:{};",
            self.from_x, self.from_y, self.from_scale
        );
        if self.to_opacity != 1.0 {
            style.push_str(&format!("--enter-opacity:{};", self.to_opacity));
        }
        style.push_str(&format!(
            "animation:enter {:.2}s ease-out {:.2}s both;",
            self.duration, self.delay
        ));
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rise_style() {
        assert_eq!(
            Entrance::rise(0.05, 0.5, 12.0).style(),
            "--enter-x:0px;--enter-y:12px;--enter-scale:1;animation:enter 0.50s ease-out 0.05s both;"
        );
    }

    #[test]
    fn stagger_increases_with_index() {
        let delays: Vec<String> = (0..3)
            .map(|i| format!("{:.2}", Entrance::stagger(0.2, 0.06, i)))
            .collect();
        assert_eq!(delays, ["0.20", "0.26", "0.32"]);
    }

    #[test]
    fn slide_and_scale() {
        let style = Entrance::slide(0.25, 0.4, -8.0).with_scale(0.96).style();
        assert!(style.starts_with("--enter-x:-8px;--enter-y:0px;--enter-scale:0.96;"));
    }

    #[test]
    fn partial_opacity_sets_the_end_value() {
        assert_eq!(
            Entrance::rise(0.0, 0.6, 0.0).with_scale(0.6).with_opacity(0.8).style(),
            "--enter-x:0px;--enter-y:0px;--enter-scale:0.6;--enter-opacity:0.8;animation:enter 0.60s ease-out 0.00s both;"
        );
    }
}
