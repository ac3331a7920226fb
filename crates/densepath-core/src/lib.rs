//! Densepath Core Library
//!
//! Core algorithmic components for the densepath shortest-path tool:
//! a red-black ordered store and a dense all-pairs distance matrix.

pub mod edge;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod store;
