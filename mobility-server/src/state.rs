use std::path::PathBuf;
use std::sync::Arc;

use mobility_core::prelude::*;

use crate::config::ServerConfig;

/// Shared application state: source paths plus the matrix cache
#[derive(Debug)]
pub struct AppState {
    pub nodes_path: PathBuf,
    pub edges_path: PathBuf,
    pub cache: MatrixCache,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            nodes_path: config.nodes_path(),
            edges_path: config.edges_path(),
            cache: MatrixCache::new(),
        }
    }

    /// Load both source documents
    ///
    /// # Errors
    ///
    /// Returns an error if either document cannot be read or parsed.
    pub fn load_sources(&self) -> Result<(NetworkData, EdgeSource), Error> {
        let network = load_network(&self.nodes_path)?;
        let edges = load_edges(&self.edges_path)?;
        Ok((network, edges))
    }
}
