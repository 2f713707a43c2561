//! Core domain logic for the notebook.
//! This crate is the single source of truth for note storage invariants.

pub mod clock;
pub mod logging;
pub mod model;
pub mod notebook;

pub use clock::{Clock, FixedClock, SystemClock};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::Note;
pub use notebook::Notebook;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
