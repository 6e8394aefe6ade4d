//! Shortest-path computation over the adjacency matrix

mod all_pairs;
mod dijkstra;

pub use all_pairs::{all_pairs_matrix, complete_matrix};
