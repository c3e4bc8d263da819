//! Mount/unmount transitions.
//!
//! ```text
//! Idle ──show──> Entering ──tick──> Settled
//!                   ^  |               |
//!                show hide            hide
//!                   |  v               v
//! Removed <─tick── Exiting <───────────┘
//! ```
//!
//! Reversing mid-flight keeps the current progress, so a sheet that is
//! half-collapsed expands again from where it is.

/// Lifecycle phase of an animated element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Entering,
    Settled,
    Exiting,
    Removed,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Entering => "entering",
            Phase::Settled => "settled",
            Phase::Exiting => "exiting",
            Phase::Removed => "removed",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Presence {
    phase: Phase,
    /// Linear progress, 0 = hidden, 1 = fully shown
    progress: f64,
    duration: f64,
}

impl Presence {
    /// `duration` is the full enter (or exit) time in seconds.
    pub fn new(duration: f64) -> Self {
        Self {
            phase: Phase::Idle,
            progress: 0.0,
            duration: duration.max(f64::EPSILON),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Ease-out cubic of [`Self::progress`]; what the view should render.
    pub fn eased(&self) -> f64 {
        1.0 - (1.0 - self.progress).powi(3)
    }

    /// Whether the element belongs in the DOM.
    pub fn is_mounted(&self) -> bool {
        matches!(self.phase, Phase::Entering | Phase::Settled | Phase::Exiting)
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Entering | Phase::Exiting)
    }

    pub fn show(&mut self) {
        if matches!(self.phase, Phase::Idle | Phase::Removed | Phase::Exiting) {
            self.phase = Phase::Entering;
        }
    }

    pub fn hide(&mut self) {
        if matches!(self.phase, Phase::Entering | Phase::Settled) {
            self.phase = Phase::Exiting;
        }
    }

    /// Drive the element toward `visible`.
    pub fn set_visible(&mut self, visible: bool) {
        if visible { self.show() } else { self.hide() }
    }

    /// Jump to the end of the running transition.
    pub fn finish(&mut self) {
        match self.phase {
            Phase::Entering => {
                self.progress = 1.0;
                self.phase = Phase::Settled;
            }
            Phase::Exiting => {
                self.progress = 0.0;
                self.phase = Phase::Removed;
            }
            Phase::Idle | Phase::Settled | Phase::Removed => {}
        }
    }

    /// Advance by `dt` seconds. Returns `true` while a transition is running.
    pub fn tick(&mut self, dt: f64) -> bool {
        let delta = dt.max(0.0) / self.duration;
        match self.phase {
            Phase::Entering => {
                self.progress = (self.progress + delta).min(1.0);
                if self.progress >= 1.0 {
                    self.phase = Phase::Settled;
                }
            }
            Phase::Exiting => {
                self.progress = (self.progress - delta).max(0.0);
                if self.progress <= 0.0 {
                    self.phase = Phase::Removed;
                }
            }
            Phase::Idle | Phase::Settled | Phase::Removed => {}
        }
        self.is_animating()
    }
}

/// Inline style collapsing a block to zero height at progress 0 and to its
/// natural height at 1. The element's single child needs `min-height: 0`
/// and `overflow: hidden` (the `collapse-inner` class).
pub fn collapse_style(progress: f64) -> String {
    let p = progress.clamp(0.0, 1.0);
    format!("display:grid;grid-template-rows:{:.3}fr;opacity:{:.3};", p, p)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    fn run(presence: &mut Presence) -> usize {
        let mut frames = 0;
        while presence.tick(FRAME) {
            frames += 1;
            assert!(frames < 1000);
        }
        frames
    }

    #[test]
    fn starts_idle_and_unmounted() {
        let presence = Presence::new(0.25);
        assert_eq!(presence.phase(), Phase::Idle);
        assert!(!presence.is_mounted());
    }

    #[test]
    fn enter_then_settle() {
        let mut presence = Presence::new(0.25);
        presence.show();
        assert_eq!(presence.phase(), Phase::Entering);
        assert!(presence.is_mounted());

        let frames = run(&mut presence);
        assert_eq!(presence.phase(), Phase::Settled);
        assert_eq!(presence.progress(), 1.0);
        assert!((14..=16).contains(&frames), "took {} frames", frames);
    }

    #[test]
    fn exit_then_remove() {
        let mut presence = Presence::new(0.25);
        presence.show();
        run(&mut presence);

        presence.hide();
        assert_eq!(presence.phase(), Phase::Exiting);
        assert!(presence.is_mounted());
        run(&mut presence);
        assert_eq!(presence.phase(), Phase::Removed);
        assert!(!presence.is_mounted());
        assert_eq!(presence.progress(), 0.0);
    }

    #[test]
    fn hide_before_show_is_noop() {
        let mut presence = Presence::new(0.25);
        presence.hide();
        assert_eq!(presence.phase(), Phase::Idle);
    }

    #[test]
    fn reversal_keeps_progress() {
        let mut presence = Presence::new(1.0);
        presence.show();
        presence.tick(0.4);
        presence.hide();
        assert_eq!(presence.phase(), Phase::Exiting);
        assert!((presence.progress() - 0.4).abs() < 1e-9);

        presence.tick(0.1);
        presence.show();
        assert_eq!(presence.phase(), Phase::Entering);
        assert!((presence.progress() - 0.3).abs() < 1e-9);
    }

    #[test]
    fn removed_can_reenter() {
        let mut presence = Presence::new(0.1);
        presence.set_visible(true);
        run(&mut presence);
        presence.set_visible(false);
        run(&mut presence);
        presence.set_visible(true);
        assert_eq!(presence.phase(), Phase::Entering);
    }

    #[test]
    fn eased_progress_is_bounded_and_front_loaded() {
        let mut presence = Presence::new(1.0);
        presence.show();
        presence.tick(0.5);
        assert!(presence.eased() > presence.progress());
        run(&mut presence);
        assert_eq!(presence.eased(), 1.0);
    }

    #[test]
    fn finish_completes_either_direction() {
        let mut presence = Presence::new(0.25);
        presence.show();
        presence.finish();
        assert_eq!(presence.phase(), Phase::Settled);
        presence.hide();
        presence.finish();
        assert_eq!(presence.phase(), Phase::Removed);
        assert!(!presence.is_animating());
    }

    #[test]
    fn collapse_style_clamps() {
        assert_eq!(
            collapse_style(-1.0),
            "display:grid;grid-template-rows:0.000fr;opacity:0.000;"
        );
        assert_eq!(
            collapse_style(1.0),
            "display:grid;grid-template-rows:1.000fr;opacity:1.000;"
        );
    }
}
