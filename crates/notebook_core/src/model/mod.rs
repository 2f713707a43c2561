//! Domain model for notebook entries.
//!
//! # Responsibility
//! - Define the canonical note record used by notebook operations.
//!
//! # Invariants
//! - A note is immutable after construction; edits are not part of the model.
//! - Deletion is structural (the notebook drops the value), never a tombstone.

pub mod note;
