//! HTTP endpoint server using Axum

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info, warn, Level};

use crate::config::AppConfig;
use crate::indicators::error::IndicatorError;
use crate::indicators::structure::detect_swing_points;
use crate::models::{Candle, StructureAnalysis, SwingPoint};
use crate::signals::engine::StructureEngine;

pub const SERVICE_NAME: &str = "swingscope";
pub const HEALTH_STATUS: &str = "healthy";

#[derive(Clone)]
pub struct AppState {
    pub start_time: Arc<Instant>,
    pub engine: Arc<StructureEngine>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            start_time: Arc::new(Instant::now()),
            engine: Arc::new(StructureEngine::new(config.analysis.clone())),
        }
    }
}

type ApiError = (StatusCode, Json<Value>);

fn validation_error(e: IndicatorError) -> ApiError {
    warn!(error = %e, "rejected structure request");
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({ "error": e.to_string() })),
    )
}

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Json(json!({
        "status": HEALTH_STATUS,
        "uptime_seconds": uptime_seconds,
        "service": SERVICE_NAME
    }))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SwingRequest {
    pub candles: Vec<Candle>,
    #[serde(default)]
    pub depth: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SwingResponse {
    pub count: usize,
    pub swing_points: Vec<SwingPoint>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub candles: Vec<Candle>,
    #[serde(default)]
    pub depth: Option<usize>,
    #[serde(default)]
    pub current_price: Option<f64>,
}

/// Detect and label swing points
async fn detect_swings(
    State(state): State<AppState>,
    Json(request): Json<SwingRequest>,
) -> Result<Json<SwingResponse>, ApiError> {
    let depth = request.depth.unwrap_or_else(|| state.engine.depth());
    let swing_points = detect_swing_points(&request.candles, depth).map_err(validation_error)?;

    Ok(Json(SwingResponse {
        count: swing_points.len(),
        swing_points,
    }))
}

/// Full structure analysis with trend and signal
async fn analyze_structure(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<StructureAnalysis>, ApiError> {
    let depth = request.depth.unwrap_or_else(|| state.engine.depth());
    let analysis = state
        .engine
        .analyze(&request.candles, depth, request.current_price)
        .map_err(validation_error)?;

    Ok(Json(analysis))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/structure/swings", post(detect_swings))
        .route("/api/structure/analyze", post(analyze_structure))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(
    config: AppConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let port = config.port;
    let app = create_router(AppState::new(&config));
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(port = port, depth = config.analysis.depth, "HTTP server listening on port {}", port);
    axum::serve(listener, app).await?;

    Ok(())
}
