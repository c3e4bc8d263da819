//! Page configuration.
//!
//! Defaults are compiled in. `index.html` may override any field by embedding
//! a JSON object in `<script type="application/json" id="landing-config">`;
//! missing fields keep their defaults.

use serde::Deserialize;
use web_sys::Document;

use crate::error::{LandingError, Result};
use crate::motion::SpringConfig;

/// Id of the optional `<script>` element holding JSON overrides.
pub const CONFIG_ELEMENT_ID: &str = "landing-config";

/// Log level used before (or without) a parsed config.
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    /// Scroll offset (px) past which the nav turns solid
    pub scroll_threshold_px: f64,
    /// Spring driving the hero glow toward the pointer
    pub glow_spring: SpringConfig,
    /// Mobile sheet expand/collapse duration
    pub sheet_transition_ms: u32,
    /// Element id the app mounts into
    pub mount_id: String,
    /// `tracing` max level: error, warn, info, debug, trace, off
    pub log_level: String,
    /// Brand name shown next to the logo
    pub brand: String,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            scroll_threshold_px: 8.0,
            glow_spring: SpringConfig::default(),
            sheet_transition_ms: 250,
            mount_id: "app".into(),
            log_level: DEFAULT_LOG_LEVEL.into(),
            brand: "Agentic".into(),
        }
    }
}

impl LandingConfig {
    /// Read overrides from the document, falling back to defaults when the
    /// config element is absent.
    pub fn load(document: &Document) -> Result<Self> {
        match document.get_element_by_id(CONFIG_ELEMENT_ID) {
            Some(element) => Self::from_json(&element.text_content().unwrap_or_default()),
            None => Ok(Self::default()),
        }
    }

    pub fn from_json(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.scroll_threshold_px.is_finite() || self.scroll_threshold_px < 0.0 {
            return Err(LandingError::InvalidConfig(format!(
                "scroll_threshold_px must be a non-negative number, got {}",
                self.scroll_threshold_px
            )));
        }
        if self.sheet_transition_ms == 0 {
            return Err(LandingError::InvalidConfig(
                "sheet_transition_ms must be greater than zero".into(),
            ));
        }
        if self.mount_id.trim().is_empty() {
            return Err(LandingError::InvalidConfig("mount_id must not be empty".into()));
        }
        self.glow_spring
            .validate()
            .map_err(|reason| LandingError::InvalidConfig(format!("glow_spring: {}", reason)))
    }

    /// Sheet transition in seconds, as consumed by [`crate::motion::Presence`].
    pub fn sheet_transition_secs(&self) -> f64 {
        f64::from(self.sheet_transition_ms) / 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_text_yields_defaults() {
        assert_eq!(LandingConfig::from_json("  \n").unwrap(), LandingConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = LandingConfig::from_json(r#"{"scroll_threshold_px": 24, "brand": "Acme"}"#)
            .unwrap();
        assert_eq!(config.scroll_threshold_px, 24.0);
        assert_eq!(config.brand, "Acme");
        assert_eq!(config.sheet_transition_ms, 250);
        assert_eq!(config.glow_spring, SpringConfig::default());
    }

    #[test]
    fn nested_spring_override() {
        let config =
            LandingConfig::from_json(r#"{"glow_spring": {"stiffness": 120}}"#).unwrap();
        assert_eq!(config.glow_spring.stiffness, 120.0);
        assert_eq!(config.glow_spring.damping, 30.0);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = LandingConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, LandingError::Config(_)));
    }

    #[test]
    fn negative_threshold_rejected() {
        let err = LandingConfig::from_json(r#"{"scroll_threshold_px": -1}"#).unwrap_err();
        assert!(matches!(err, LandingError::InvalidConfig(_)));
    }

    #[test]
    fn zero_mass_rejected() {
        let err = LandingConfig::from_json(r#"{"glow_spring": {"mass": 0}}"#).unwrap_err();
        assert!(err.to_string().contains("glow_spring"));
    }

    #[test]
    fn springy_glow_rejected() {
        let err = LandingConfig::from_json(r#"{"glow_spring": {"damping": 2}}"#).unwrap_err();
        assert!(matches!(err, LandingError::InvalidConfig(_)));
        assert!(err.to_string().contains("damping ratio"));
    }

    #[test]
    fn sheet_duration_in_seconds() {
        assert_eq!(LandingConfig::default().sheet_transition_secs(), 0.25);
    }
}
