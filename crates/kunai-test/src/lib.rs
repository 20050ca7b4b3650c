//! Kunai - integration test support.
//!
//! Re-exports the workspace crates under one `kunai::` style path and holds
//! the `proptest` strategies shared by the property tests in `tests/`.

pub use kunai_core as base;
pub use kunai_data as data;
pub use kunai_time as time;

pub mod strategy;
