//! Shared utilities for the hull dependency resolver.
//!
//! This crate provides cross-cutting concerns used by all other hull crates:
//! error types, filesystem helpers, and terminal progress indicators.

pub mod errors;
pub mod fs;
pub mod progress;
