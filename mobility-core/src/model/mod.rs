//! Data model for the travel-time network
//!
//! Contains the boundary record types and the all-pairs travel matrix.

mod matrix;
mod network;

pub use matrix::{AdjacencyEntry, TravelMatrix};
pub use network::{EdgeRecord, EdgeSource, NetworkNode, NodeDirectory, Person, PersonDirectory};
