//! Startup and DOM errors.

use wasm_bindgen::JsValue;

/// Result alias used across the landing crate.
pub type Result<T> = std::result::Result<T, LandingError>;

/// Everything that can stop the page from mounting or a listener from attaching.
#[derive(Debug, thiserror::Error)]
pub enum LandingError {
    /// Running outside a browser window
    #[error("no global `window` available")]
    NoWindow,
    /// Window exists but has no document
    #[error("window has no `document`")]
    NoDocument,
    /// Mount target missing from index.html
    #[error("mount root `#{0}` not found in document")]
    MissingMountRoot(String),
    /// Embedded configuration is not valid JSON for [`crate::config::LandingConfig`]
    #[error("invalid landing config: {0}")]
    Config(#[from] serde_json::Error),
    /// Configuration parsed but holds unusable values
    #[error("invalid landing config: {0}")]
    InvalidConfig(String),
    /// A DOM call threw
    #[error("{context} failed: {message}")]
    Dom {
        context: &'static str,
        message: String,
    },
}

impl LandingError {
    /// Wrap a thrown `JsValue` with the name of the call that produced it.
    pub fn dom(context: &'static str, value: JsValue) -> Self {
        LandingError::Dom {
            context,
            message: js_message(&value),
        }
    }
}

fn js_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    // Error objects carry their text in `message`
    js_sys::Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}
