//! Shared handle for the computed travel matrix
//!
//! The matrix is recomputed rarely and read often. [`MatrixCache`] holds at
//! most one completed matrix: a recompute swaps in a fresh `Arc` snapshot
//! and bumps the generation counter, while readers keep whatever snapshot
//! they already cloned and never observe a partially updated grid.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::Error;
use crate::algo::meeting::{MeetingPlan, optimal_meeting};
use crate::model::{EdgeSource, NodeDirectory, PersonDirectory, TravelMatrix};
use crate::routing::all_pairs_matrix;

#[derive(Debug, Default)]
struct Slot {
    matrix: Option<Arc<TravelMatrix>>,
    generation: u64,
}

/// Versioned single-writer / multi-reader cache for a [`TravelMatrix`]
#[derive(Debug, Default)]
pub struct MatrixCache {
    slot: RwLock<Slot>,
}

impl MatrixCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot, if any
    pub fn current(&self) -> Option<Arc<TravelMatrix>> {
        self.read_slot().matrix.clone()
    }

    /// Number of replacements and invalidations so far
    pub fn generation(&self) -> u64 {
        self.read_slot().generation
    }

    /// Swaps in a freshly computed matrix wholesale
    pub fn replace(&self, matrix: TravelMatrix) -> Arc<TravelMatrix> {
        let snapshot = Arc::new(matrix);
        let mut slot = self.write_slot();
        slot.matrix = Some(Arc::clone(&snapshot));
        slot.generation += 1;
        snapshot
    }

    /// Drops the cached matrix; the next consumer recomputes
    pub fn invalidate(&self) {
        let mut slot = self.write_slot();
        slot.matrix = None;
        slot.generation += 1;
    }

    fn read_slot(&self) -> RwLockReadGuard<'_, Slot> {
        self.slot.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_slot(&self) -> RwLockWriteGuard<'_, Slot> {
        self.slot.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Solves a meeting request against the cached matrix, computing and
/// caching one from `nodes`/`edges` when the cache is empty
///
/// # Errors
///
/// Request validation errors surface before any matrix computation; a bad
/// request never warms the cache.
pub fn meeting_with_cache(
    cache: &MatrixCache,
    nodes: &NodeDirectory,
    people: &PersonDirectory,
    edges: &EdgeSource,
    requested: &[String],
) -> Result<MeetingPlan, Error> {
    for id in requested {
        if !people.contains_key(id) {
            return Err(Error::InvalidPerson(id.clone()));
        }
    }

    let matrix = match cache.current() {
        Some(matrix) => matrix,
        None => cache.replace(all_pairs_matrix(nodes, edges)?),
    };

    optimal_meeting(&matrix, nodes, people, requested)
}
