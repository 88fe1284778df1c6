//! Core data types for the hull dependency resolver.
//!
//! This crate defines the fundamental types the resolvers operate on:
//! manifest parsing, version records, crawled closures, installation plans,
//! and version-range evaluation.
//!
//! This crate is intentionally free of async code and network I/O.

pub mod closure;
pub mod manifest;
pub mod package;
pub mod plan;
pub mod range;
