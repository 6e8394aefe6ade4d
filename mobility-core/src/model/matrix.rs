//! All-pairs travel matrix and its per-pair entries

use hashbrown::HashMap;

use crate::Time;

/// Entry for one ordered node pair
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyEntry {
    /// Shortest known travel time, `f64::INFINITY` while unreachable
    pub time: Time,
    /// Node indices from source to target; `None` while no path is recorded
    pub path: Option<Vec<usize>>,
    /// Concatenated route description for the recorded path
    pub text: Option<String>,
}

impl AdjacencyEntry {
    fn unreachable() -> Self {
        Self {
            time: Time::INFINITY,
            path: None,
            text: None,
        }
    }

    /// True once a finite travel time is recorded for the pair
    pub fn is_reachable(&self) -> bool {
        self.time.is_finite()
    }
}

/// All-pairs travel matrix over a fixed node ordering
///
/// Holds the canonical node-id list, the id -> index map and the `n x n`
/// entry grid. A matrix is built once per computation and then swapped into
/// a [`crate::cache::MatrixCache`] wholesale, so readers never observe a
/// partially updated grid.
#[derive(Debug, Clone, PartialEq)]
pub struct TravelMatrix {
    nodes: Vec<String>,
    index: HashMap<String, usize>,
    entries: Vec<Vec<AdjacencyEntry>>,
    rounds: u32,
}

impl TravelMatrix {
    /// Seed a matrix for `node_ids`: zero self entries, everything else
    /// unreachable
    pub(crate) fn seeded(node_ids: Vec<String>) -> Self {
        let n = node_ids.len();
        let index = node_ids
            .iter()
            .enumerate()
            .map(|(i, id)| (id.clone(), i))
            .collect();
        let mut entries = vec![vec![AdjacencyEntry::unreachable(); n]; n];
        for (i, row) in entries.iter_mut().enumerate() {
            row[i].time = 0.0;
            row[i].path = Some(vec![i]);
        }
        Self {
            nodes: node_ids,
            index,
            entries,
            rounds: 0,
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Canonical node ids in index order
    pub fn node_ids(&self) -> &[String] {
        &self.nodes
    }

    /// Node id for a canonical index
    pub fn node_id(&self, index: usize) -> &str {
        &self.nodes[index]
    }

    /// Canonical index for a node id
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Entry for the ordered pair `(source, target)`
    pub fn entry(&self, source: usize, target: usize) -> &AdjacencyEntry {
        &self.entries[source][target]
    }

    pub(crate) fn entry_mut(&mut self, source: usize, target: usize) -> &mut AdjacencyEntry {
        &mut self.entries[source][target]
    }

    /// Fixpoint sweeps performed, counting the final sweep that improved
    /// nothing
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub(crate) fn set_rounds(&mut self, rounds: u32) {
        self.rounds = rounds;
    }

    /// Ordered pairs with a finite travel time
    pub fn reachable_pairs(&self) -> usize {
        self.entries
            .iter()
            .flatten()
            .filter(|entry| entry.is_reachable())
            .count()
    }
}
