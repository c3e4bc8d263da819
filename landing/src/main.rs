// Agentic landing page entry point (built by trunk).

use agentic_landing::config::DEFAULT_LOG_LEVEL;
use agentic_landing::{boot, telemetry};

fn main() {
    console_error_panic_hook::set_once();

    if let Err(err) = boot() {
        // Config may be what failed, so log with the default level.
        telemetry::init(DEFAULT_LOG_LEVEL);
        tracing::error!(error = %err, "landing page failed to start");
        wasm_bindgen::throw_str(&err.to_string());
    }
}
