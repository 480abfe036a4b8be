//! HTTP API routes
//!
//! Defines all REST API endpoints for the server.

use crate::center::{available_kinds, Report, SolverSettings};
use crate::coord::parse::parse_coordinates;
use crate::coord::{CoordinateSet, Coordinates};
use crate::error::Error;
use crate::format::{available_formats, FormatInfo};
use crate::server::state::AppState;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, error};

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/centers", post(centers_handler))
        .route("/api/centers/kinds", get(kinds_handler))
        .route("/api/status", get(status_handler))
        .route("/api/formats", get(formats_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Centers request body
///
/// Exactly one of `text` or `coordinates` must be given.
#[derive(Debug, Deserialize)]
pub struct CentersRequest {
    /// Free-form text, one coordinate per line
    pub text: Option<String>,
    /// Already-structured coordinates
    pub coordinates: Option<Vec<Coordinates>>,
}

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = if self.code == "INTERNAL_ERROR" {
            StatusCode::INTERNAL_SERVER_ERROR
        } else {
            StatusCode::BAD_REQUEST
        };
        (status, Json(self)).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let code = match &err {
            Error::Format(_) => "FORMAT_ERROR",
            Error::EmptyInput => "EMPTY_INPUT",
            Error::InvalidCoordinates(_) => "INVALID_COORDINATES",
            Error::Config(_) => "CONFIG_ERROR",
            _ => "INTERNAL_ERROR",
        };
        ApiError {
            error: err.to_string(),
            code: code.to_string(),
        }
    }
}

impl CentersRequest {
    /// Turn the request into a validated coordinate set
    fn into_points(self) -> Result<CoordinateSet, ApiError> {
        match (self.text, self.coordinates) {
            (Some(text), None) => Ok(parse_coordinates(&text)?),
            (None, Some(coords)) => Ok(CoordinateSet::new(coords)?),
            _ => Err(ApiError {
                error: "Provide exactly one of 'text' or 'coordinates'".to_string(),
                code: "INVALID_REQUEST".to_string(),
            }),
        }
    }
}

/// Compute centers endpoint
///
/// POST /api/centers
async fn centers_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CentersRequest>,
) -> Result<Json<Report>, ApiError> {
    let points = req.into_points()?;
    let settings: SolverSettings = state.solver_settings().await;

    debug!(points = points.len(), "computing centers");

    let report = tokio::task::spawn_blocking(move || Report::new(points, &settings))
        .await
        .map_err(|e| {
            error!("center computation failed: {}", e);
            ApiError {
                error: "Center computation failed".to_string(),
                code: "INTERNAL_ERROR".to_string(),
            }
        })?;

    Ok(Json(report))
}

/// Status response
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Server is running
    pub running: bool,
    /// Server version
    pub version: String,
    /// Uptime in seconds
    pub uptime_secs: u64,
    /// Solver parameters in effect
    pub settings: SolverSettings,
}

/// Server status endpoint
///
/// GET /api/status
async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        running: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.uptime_secs(),
        settings: state.solver_settings().await,
    })
}

/// Center kinds list response
#[derive(Debug, Serialize, Deserialize)]
pub struct KindsResponse {
    pub kinds: Vec<KindInfo>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct KindInfo {
    pub name: String,
    pub label: String,
    pub description: String,
}

/// List available center kinds
///
/// GET /api/centers/kinds
async fn kinds_handler() -> Json<KindsResponse> {
    let kinds = available_kinds()
        .into_iter()
        .map(|k| KindInfo {
            name: k.to_string(),
            label: k.label().to_string(),
            description: k.description().to_string(),
        })
        .collect();

    Json(KindsResponse { kinds })
}

/// Formats list response
#[derive(Debug, Serialize, Deserialize)]
pub struct FormatsResponse {
    pub formats: Vec<FormatInfo>,
}

/// List available output formats
///
/// GET /api/formats
async fn formats_handler() -> Json<FormatsResponse> {
    Json(FormatsResponse {
        formats: available_formats(),
    })
}
