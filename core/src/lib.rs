//! # VeriCode Core
//!
//! Core domain layer for the VeriCode library.
//! This crate contains the verification code entity and the error types
//! that make up the verification domain.

pub mod domain;
pub mod errors;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
