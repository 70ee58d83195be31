//! Rocket Design Calculator: find stage stacks that satisfy a mission.
//!
//! The search and dominance logic lives in focused workspace crates; this
//! facade re-exports them under one roof so multiple front-ends (CLI,
//! exporters, future GUIs) share the same library surface.

pub use rdc_core::{accel, constants};
pub use rdc_export as export;
pub use rdc_parts as parts;
pub use rdc_search as search;

pub use rdc_search::{Design, Mission, MissionError, Requirement, find_designs};

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
