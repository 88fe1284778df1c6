//! Resolution engine for hull: the concurrent registry crawler that
//! snapshots the reachable dependency universe, a greedy first-fit resolver,
//! an exhaustive backtracking resolver, and plan graph rendering.

pub mod backtrack;
pub mod crawler;
pub mod error;
pub mod graph;
pub mod naive;
