//! This module is responsible for loading network data from JSON sources
//! and seeding the adjacency matrix from raw records.

mod builder;

pub use builder::build_adjacency;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::Error;
use crate::model::{EdgeSource, NodeDirectory, PersonDirectory};

/// Node and person directories as stored in a single network document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NetworkData {
    pub nodes: NodeDirectory,
    #[serde(default)]
    pub people: PersonDirectory,
}

/// Read the node/person document
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_network(path: &Path) -> Result<NetworkData, Error> {
    read_json(path)
}

/// Read the edge source document
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_edges(path: &Path) -> Result<EdgeSource, Error> {
    read_json(path)
}

fn read_json<T>(path: &Path) -> Result<T, Error>
where
    T: for<'de> Deserialize<'de>,
{
    let file = File::open(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Failed to open file '{}': {}", path.display(), e),
        )
    })?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}
