//! Animation models, kept free of DOM types so they run under `cargo test`.

mod entrance;
mod orbit;
mod presence;
mod reveal;
mod spring;

pub use entrance::Entrance;
pub use orbit::{INNER_RING_PERIOD, OUTER_RING_PERIOD, OrbitNode};
pub use presence::{Phase, Presence, collapse_style};
pub use reveal::RevealLatch;
pub use spring::{Spring, Spring2D, SpringConfig};
