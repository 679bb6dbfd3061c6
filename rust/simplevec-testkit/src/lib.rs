//! Test helpers shared by the simplevec crates.
//!
//! - [`tracked`]: an element type that counts its live instances, used to
//!   check that storage is released exactly once.
//! - [`ops`]: seeded random operation scripts for model-based tests.

pub mod ops;
pub mod tracked;

pub use ops::{Op, OpScript};
pub use tracked::{LiveGuard, Tracked};
