// Re-export key components
pub use crate::algo::meeting::{MeetingPlan, PersonRoute, optimal_meeting};
pub use crate::cache::{MatrixCache, meeting_with_cache};
pub use crate::loading::{NetworkData, build_adjacency, load_edges, load_network};
pub use crate::model::{
    AdjacencyEntry, EdgeRecord, EdgeSource, NetworkNode, NodeDirectory, Person, PersonDirectory,
    TravelMatrix,
};
pub use crate::routing::{all_pairs_matrix, complete_matrix};

pub use crate::Error;
pub use crate::Time;
