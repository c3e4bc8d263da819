// Landing page sections, top to bottom: nav, hero, feature grid, CTA, footer.

mod agent_stack;
mod buttons;
mod cta;
mod features;
mod footer;
mod hero;
mod icons;
mod logo;
mod nav;
mod reveal;

pub use agent_stack::AgentStack;
pub use cta::CtaSection;
pub use features::WhyAgentic;
pub use footer::Footer;
pub use hero::HeroAgents;
pub use logo::{Brand, Logo};
pub use nav::NavBar;
pub use reveal::Reveal;
