//! guidebook-rs
//!
//! Workspace umbrella crate. Re-exports `guide-core` so the demos under
//! `demos/` and downstream users can depend on a single name.

pub use guide_core::*;
