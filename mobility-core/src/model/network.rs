//! Boundary data shapes for the travel network

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::Time;

/// A location in the travel network
///
/// The node id is the key under which the record is stored in the
/// [`NodeDirectory`]. The fields here are display data and are never
/// interpreted by the routing core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkNode {
    /// Human-readable display name
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `[lat, lon]` pair for map rendering
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coords: Option<[f64; 2]>,
}

/// Node id -> node record; key order fixes the canonical node indices
pub type NodeDirectory = BTreeMap<String, NetworkNode>;

/// A person anchored at a home node
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    /// Node id the person travels from
    pub home: String,
    /// Nodes this person would meet at, in listed order
    #[serde(default)]
    pub points_of_interest: Vec<String>,
}

/// Person id -> person record
pub type PersonDirectory = BTreeMap<String, Person>;

/// A single raw edge record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: String,
    pub to: String,
    /// Travel time in minutes; records with a negative time are dropped
    pub time: Time,
    /// Optional description of the segment ("take bus 12", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Raw edge collection as loaded from an edge source document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeSource {
    /// When false, every edge is mirrored onto the reverse pair
    #[serde(default)]
    pub directed: bool,
    pub edges: Vec<EdgeRecord>,
}
