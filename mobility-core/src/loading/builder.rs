use log::debug;

use crate::Error;
use crate::Time;
use crate::model::{EdgeSource, NodeDirectory, TravelMatrix};

/// Builds the seeded adjacency matrix from raw node and edge records
///
/// Node indices follow the directory's key order. Every edge with a
/// nonnegative time lowers the pair's time to the minimum seen so far,
/// while its text always overwrites the pair's text: for duplicated pairs
/// the last-processed edge's text wins even when an earlier edge set the
/// minimum time. Undirected sources mirror each update onto the reverse
/// pair.
///
/// # Errors
///
/// Returns [`Error::UnknownNode`] if an edge names an id missing from the
/// directory.
pub fn build_adjacency(nodes: &NodeDirectory, edges: &EdgeSource) -> Result<TravelMatrix, Error> {
    let node_ids: Vec<String> = nodes.keys().cloned().collect();
    let mut matrix = TravelMatrix::seeded(node_ids);

    let mut dropped = 0usize;
    for edge in &edges.edges {
        let from = matrix
            .index_of(&edge.from)
            .ok_or_else(|| Error::UnknownNode(edge.from.clone()))?;
        let to = matrix
            .index_of(&edge.to)
            .ok_or_else(|| Error::UnknownNode(edge.to.clone()))?;
        if edge.time < 0.0 {
            dropped += 1;
            continue;
        }
        apply_edge(&mut matrix, from, to, edge.time, edge.text.as_deref());
        if !edges.directed {
            apply_edge(&mut matrix, to, from, edge.time, edge.text.as_deref());
        }
    }
    if dropped > 0 {
        debug!("dropped {dropped} edges with negative travel time");
    }

    Ok(matrix)
}

fn apply_edge(matrix: &mut TravelMatrix, from: usize, to: usize, time: Time, text: Option<&str>) {
    let entry = matrix.entry_mut(from, to);
    entry.time = entry.time.min(time);
    entry.text = text.map(str::to_owned);
}
