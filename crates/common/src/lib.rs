//! Shared building blocks for the puppy shelter crates: wire types,
//! logging setup and runtime environment checks.

pub mod types;
pub mod utils;
pub mod env;
