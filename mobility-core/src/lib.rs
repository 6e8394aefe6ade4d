//! Core engine for travel-time planning over a small location graph
//!
//! Builds an indexed adjacency matrix from raw node and edge records, runs
//! it to the all-pairs shortest-path fixpoint (time, path and route text
//! per ordered pair) and selects minimax meeting points for groups of
//! people anchored at home locations.

pub mod algo;
pub mod cache;
pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;

/// Travel time in minutes; `f64::INFINITY` marks unreachable pairs
pub type Time = f64;
