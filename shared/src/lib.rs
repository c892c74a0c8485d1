//! Shared abstractions for the VeriCode domain library
//!
//! This crate provides cross-cutting functionality used by the domain crates:
//! - Time source abstraction (injectable UTC clock)

pub mod time;

// Re-export commonly used items at crate root
pub use time::{DateTimeProvider, FixedDateTimeProvider, SystemDateTimeProvider};
