// Agentic landing page, Leptos 0.8 CSR.
//
// Pure models (content, state, motion, config) compile and test natively;
// `dom` and `sections` need a browser.

pub mod config;
pub mod content;
pub mod dom;
pub mod error;
pub mod motion;
pub mod sections;
pub mod state;
pub mod telemetry;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use config::LandingConfig;
use error::{LandingError, Result};
use sections::*;

/// The whole page. Sections read `config` from context; omitted, it is
/// [`LandingConfig::default`].
#[component]
pub fn App(#[prop(optional)] config: LandingConfig) -> impl IntoView {
    provide_context(config);

    view! {
        <NavBar />
        <main class="min-h-screen bg-neutral-950 pt-20 text-white">
            <HeroAgents />
            <WhyAgentic />
            <CtaSection />
        </main>
        <Footer />
    }
}

/// Read config, install logging, and mount [`App`] into the configured root.
pub fn boot() -> Result<()> {
    let document = dom::document()?;
    let config = LandingConfig::load(&document)?;
    telemetry::init(&config.log_level);

    let root = document
        .get_element_by_id(&config.mount_id)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| LandingError::MissingMountRoot(config.mount_id.clone()))?;

    tracing::info!(
        mount = %config.mount_id,
        version = env!("CARGO_PKG_VERSION"),
        "mounting landing page"
    );
    leptos::mount::mount_to(root, move || view! { <App config=config /> }).forget();
    Ok(())
}
