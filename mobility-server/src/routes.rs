use std::time::Duration;

use axum::error_handling::HandleErrorLayer;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{BoxError, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use mobility_core::prelude::*;

use crate::error::ApiError;
use crate::state::SharedState;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/api/graph", get(get_graph))
        .route("/api/all-pairs", post(recompute_all_pairs))
        .route("/api/meeting", post(solve_meeting))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(HandleErrorLayer::new(handle_timeout))
                .timeout(REQUEST_TIMEOUT),
        )
        .with_state(state)
}

async fn handle_timeout(err: BoxError) -> (StatusCode, Json<Value>) {
    (
        StatusCode::REQUEST_TIMEOUT,
        Json(json!({ "status": "error", "message": format!("request timed out: {err}") })),
    )
}

/// Raw graph payload for frontends
async fn get_graph(State(state): State<SharedState>) -> Result<Json<Value>, ApiError> {
    let (network, edges) = state.load_sources()?;

    Ok(Json(json!({
        "nodes": network.nodes,
        "people": network.people,
        "edges": edges.edges,
        "directed": edges.directed,
    })))
}

#[derive(Debug, Serialize)]
struct RecomputeSummary {
    status: &'static str,
    nodes: Vec<String>,
    message: String,
    rounds: u32,
    reachable_pairs: usize,
    total_pairs: usize,
    sparsity: f64,
}

/// Recompute the all-pairs matrix and swap it into the cache
async fn recompute_all_pairs(
    State(state): State<SharedState>,
) -> Result<Json<RecomputeSummary>, ApiError> {
    let matrix = run_blocking(move || {
        let (network, edges) = state.load_sources()?;
        let matrix = all_pairs_matrix(&network.nodes, &edges)?;
        Ok(state.cache.replace(matrix))
    })
    .await?;

    let n = matrix.node_count();
    let total_pairs = n * n;
    let reachable_pairs = matrix.reachable_pairs();
    let sparsity = if total_pairs == 0 {
        0.0
    } else {
        (total_pairs - reachable_pairs) as f64 / total_pairs as f64
    };
    info!(
        "recomputed all-pairs matrix for {n} nodes in {} rounds",
        matrix.rounds()
    );

    Ok(Json(RecomputeSummary {
        status: "success",
        nodes: matrix.node_ids().to_vec(),
        message: format!("Computed all-pairs shortest paths for {n} nodes"),
        rounds: matrix.rounds(),
        reachable_pairs,
        total_pairs,
        sparsity,
    }))
}

#[derive(Debug, Deserialize)]
struct MeetingRequest {
    people: Vec<String>,
}

#[derive(Debug, Serialize)]
struct MeetingResponse {
    status: &'static str,
    #[serde(flatten)]
    plan: MeetingPlan,
}

/// Solve a meeting request against the cached matrix, computing one on
/// demand when the cache is cold
async fn solve_meeting(
    State(state): State<SharedState>,
    Json(request): Json<MeetingRequest>,
) -> Result<Json<MeetingResponse>, ApiError> {
    if request.people.is_empty() {
        return Err(ApiError::bad_request(
            "At least one person must be specified",
        ));
    }

    let plan = run_blocking(move || {
        let (network, edges) = state.load_sources()?;
        meeting_with_cache(
            &state.cache,
            &network.nodes,
            &network.people,
            &edges,
            &request.people,
        )
    })
    .await?;

    Ok(Json(MeetingResponse {
        status: "success",
        plan,
    }))
}

/// Run CPU-bound or file-touching work off the async runtime
async fn run_blocking<T, F>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, mobility_core::Error> + Send + 'static,
    T: Send + 'static,
{
    match tokio::task::spawn_blocking(f).await {
        Ok(result) => result.map_err(ApiError::from),
        Err(join) => Err(ApiError::internal(format!("worker task failed: {join}"))),
    }
}
