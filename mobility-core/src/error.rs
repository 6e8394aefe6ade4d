use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unknown node id: {0}")]
    UnknownNode(String),
    #[error("Unknown person id: {0}")]
    InvalidPerson(String),
    #[error("No common reachable meeting point among candidates")]
    NoFeasibleMeetingPoint,
}
