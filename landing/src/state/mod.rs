//! Ephemeral UI state owned by the interactive sections.

mod nav;
mod pointer;

pub use nav::{MenuState, NavBackground};
pub use pointer::{Bounds, PointerOffset};
