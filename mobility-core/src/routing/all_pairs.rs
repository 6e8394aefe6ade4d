//! Fixpoint all-pairs computation over the travel matrix

use itertools::Itertools;
use log::info;

use super::dijkstra::{reconstruct_path, single_source};
use crate::Error;
use crate::loading::build_adjacency;
use crate::model::{EdgeSource, NodeDirectory, TravelMatrix};

/// Builds the adjacency matrix and runs it to the all-pairs fixpoint
///
/// # Errors
///
/// Returns an error if the edge records reference unknown nodes.
pub fn all_pairs_matrix(nodes: &NodeDirectory, edges: &EdgeSource) -> Result<TravelMatrix, Error> {
    let mut matrix = build_adjacency(nodes, edges)?;
    complete_matrix(&mut matrix);
    Ok(matrix)
}

/// Runs repeated single-source sweeps until a full round improves nothing
///
/// Sources are visited in index order and each search reads the matrix as
/// already updated by earlier sources of the same round; entries only ever
/// decrease. The sweep count (including the final sweep that made no
/// improvement) is recorded on the matrix.
pub fn complete_matrix(matrix: &mut TravelMatrix) {
    let n = matrix.node_count();
    let mut rounds = 0u32;

    loop {
        rounds += 1;
        let mut improved = false;

        for source in 0..n {
            let (distances, predecessors) = single_source(matrix, source);
            for target in 0..n {
                if distances[target] < matrix.entry(source, target).time {
                    let path = reconstruct_path(&predecessors, source, target);
                    let text = path.as_deref().and_then(|p| route_text(matrix, p));
                    let entry = matrix.entry_mut(source, target);
                    entry.time = distances[target];
                    entry.path = path;
                    entry.text = text;
                    improved = true;
                } else if matrix.entry(source, target).is_reachable()
                    && matrix.entry(source, target).path.is_none()
                {
                    // Distance already known, path never recorded
                    let path = reconstruct_path(&predecessors, source, target);
                    let text = path.as_deref().and_then(|p| route_text(matrix, p));
                    let entry = matrix.entry_mut(source, target);
                    entry.path = path;
                    entry.text = text;
                }
            }
        }

        if !improved {
            break;
        }
    }

    matrix.set_rounds(rounds);
    info!("all-pairs matrix for {n} nodes converged after {rounds} rounds");
}

/// Concatenated description of a path, one segment per consecutive pair
///
/// Segments without a recorded text fall back to a synthetic
/// `Go {from} -> {to}` phrase. Paths with fewer than two nodes have no
/// text.
fn route_text(matrix: &TravelMatrix, path: &[usize]) -> Option<String> {
    if path.len() < 2 {
        return None;
    }
    let text = path
        .windows(2)
        .map(|pair| match &matrix.entry(pair[0], pair[1]).text {
            Some(text) => text.clone(),
            None => format!(
                "Go {} -> {}",
                matrix.node_id(pair[0]),
                matrix.node_id(pair[1])
            ),
        })
        .join(" | ");
    Some(text)
}
