//! Remote content API layer.
//!
//! # Modules
//!
//! - `backend`: The [`RegexApi`] trait and the injectable [`ApiHandle`]
//! - `memory`: In-process backend seeded from JSON

pub mod backend;
pub mod memory;

pub use backend::{ApiHandle, RegexApi};
pub use memory::{MemoryApi, SeedData};
