//! NavBar state: background driven by scroll offset, mobile menu toggle.

/// Header fill.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavBackground {
    #[default]
    Transparent,
    Solid,
}

impl NavBackground {
    /// Solid strictly past `threshold`; no hysteresis.
    pub fn from_offset(scroll_y: f64, threshold: f64) -> Self {
        if scroll_y > threshold {
            NavBackground::Solid
        } else {
            NavBackground::Transparent
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NavBackground::Transparent => "transparent",
            NavBackground::Solid => "solid",
        }
    }

    pub fn background_color(self) -> &'static str {
        match self {
            NavBackground::Transparent => "rgba(10,10,10,0)",
            NavBackground::Solid => "rgba(10,10,10,0.7)",
        }
    }
}

/// Mobile menu sheet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    /// A link in the sheet was activated.
    pub fn navigated(self) -> Self {
        MenuState::Closed
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_boundary() {
        for offset in [0.0, 1.0, 7.9, 8.0] {
            assert_eq!(NavBackground::from_offset(offset, 8.0), NavBackground::Transparent);
        }
        for offset in [8.01, 9.0, 100.0, 10_000.0] {
            assert_eq!(NavBackground::from_offset(offset, 8.0), NavBackground::Solid);
        }
    }

    #[test]
    fn crossing_back_is_immediate() {
        let offsets = [0.0, 100.0, 8.0, 9.0, 0.0];
        let states: Vec<&str> = offsets
            .iter()
            .map(|&y| NavBackground::from_offset(y, 8.0).as_str())
            .collect();
        assert_eq!(states, ["transparent", "solid", "transparent", "solid", "transparent"]);
    }

    #[test]
    fn menu_toggle_cycle() {
        let menu = MenuState::default();
        assert_eq!(menu, MenuState::Closed);
        let menu = menu.toggled();
        assert!(menu.is_open());
        assert_eq!(menu.toggled(), MenuState::Closed);
    }

    #[test]
    fn navigating_always_closes() {
        assert_eq!(MenuState::Open.navigated(), MenuState::Closed);
        assert_eq!(MenuState::Closed.navigated(), MenuState::Closed);
    }
}
