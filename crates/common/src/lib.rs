//! Shared building blocks used by every binary in the workspace:
//! response types and the tracing subscriber setup.

pub mod types;
pub mod utils;
