use std::{cmp::Ordering, collections::BinaryHeap};

use crate::Time;
use crate::model::TravelMatrix;

#[derive(Copy, Clone)]
struct State {
    cost: Time,
    node: usize,
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node && self.cost.total_cmp(&other.cost) == Ordering::Equal
    }
}

impl Eq for State {}

// Implement Ord for State to use in BinaryHeap
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by cost (reversed from standard Rust BinaryHeap)
        other.cost.total_cmp(&self.cost)
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Single-source shortest paths treating every finite matrix entry as a
/// direct edge of that weight
///
/// Returns per-target distances and predecessors.
pub(crate) fn single_source(
    matrix: &TravelMatrix,
    start: usize,
) -> (Vec<Time>, Vec<Option<usize>>) {
    let n = matrix.node_count();
    let mut distances = vec![Time::INFINITY; n];
    let mut predecessors: Vec<Option<usize>> = vec![None; n];
    let mut heap = BinaryHeap::with_capacity(n);

    // Start node has distance 0
    distances[start] = 0.0;
    heap.push(State {
        cost: 0.0,
        node: start,
    });

    while let Some(State { cost, node }) = heap.pop() {
        // Skip if we've found a better path
        if cost > distances[node] {
            continue;
        }

        // Examine neighbors
        for next in 0..n {
            if next == node {
                continue;
            }
            let weight = matrix.entry(node, next).time;
            if !weight.is_finite() {
                continue;
            }
            let next_cost = cost + weight;
            if next_cost < distances[next] {
                distances[next] = next_cost;
                predecessors[next] = Some(node);
                heap.push(State {
                    cost: next_cost,
                    node: next,
                });
            }
        }
    }

    (distances, predecessors)
}

/// Walk predecessors backward from `target`; `None` when unreachable
pub(crate) fn reconstruct_path(
    predecessors: &[Option<usize>],
    start: usize,
    target: usize,
) -> Option<Vec<usize>> {
    if target == start {
        return Some(vec![start]);
    }
    predecessors[target]?;

    let mut path = Vec::new();
    let mut current = Some(target);
    while let Some(node) = current {
        path.push(node);
        current = predecessors[node];
    }
    path.reverse();

    (path[0] == start).then_some(path)
}
