//! Stream listing API handler.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use torrentstream_core::{
    EpisodeQuery, StreamError, StreamRecord, TorrentDetails, UserPreferences,
};

use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct StreamsRequest {
    pub torrents: Vec<TorrentDetails>,
    #[serde(flatten)]
    pub query: EpisodeQuery,
    pub preferences: UserPreferences,
}

#[derive(Debug, Serialize)]
pub struct StreamsResponse {
    pub streams: Vec<StreamRecord>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/v1/auth/{device_token}/streams
///
/// Rank the given torrents for the user and return playable streams.
pub async fn list_streams(
    State(state): State<Arc<AppState>>,
    Path(device_token): Path<String>,
    Json(request): Json<StreamsRequest>,
) -> Result<Json<StreamsResponse>, impl IntoResponse> {
    match state.service().streams(
        request.torrents,
        &request.preferences,
        request.query,
        &device_token,
    ) {
        Ok(streams) => Ok(Json(StreamsResponse { streams })),
        Err(e) => {
            let status = match e {
                StreamError::Torrent(_) => StatusCode::UNPROCESSABLE_ENTITY,
                StreamError::Vocabulary(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            Err((
                status,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ))
        }
    }
}
