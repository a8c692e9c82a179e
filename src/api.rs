/// HTTP API предсказателя

use std::sync::Arc;

use axum::{
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use tokio::sync::Mutex;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::engine::PredictionEngine;
use crate::error::PredictorError;
use crate::types::{
    AccuracyPoint, AveragesRequest, LogRequest, LogResponse, PredictRequest, PredictionResult,
    TaskAverage,
};

/// Движок под мьютексом: запись и чтение истории не пересекаются
#[derive(Clone)]
pub struct AppState {
    engine: Arc<Mutex<PredictionEngine>>,
}

impl AppState {
    pub fn new(engine: PredictionEngine) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
        }
    }
}

pub struct ApiError(PredictorError);

impl From<PredictorError> for ApiError {
    fn from(e: PredictorError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!("Request failed: {}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": self.0.to_string() })),
        )
            .into_response()
    }
}

pub fn router(engine: PredictionEngine) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/predict", post(predict))
        .route("/api/averages", post(averages))
        .route("/api/accuracy", get(accuracy))
        .route("/api/logs", post(append_logs))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(AppState::new(engine))
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Task Predictor API",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn predict(
    State(state): State<AppState>,
    Json(req): Json<PredictRequest>,
) -> Result<Json<PredictionResult>, ApiError> {
    tracing::info!(
        "Predict request: event at {}, {} tasks",
        req.event_time,
        req.selected_tasks.len()
    );

    let engine = state.engine.lock().await;
    let result = engine.get_prediction(&req.event_time, &req.selected_tasks)?;
    Ok(Json(result))
}

async fn averages(
    State(state): State<AppState>,
    Json(req): Json<AveragesRequest>,
) -> Result<Json<Vec<TaskAverage>>, ApiError> {
    let engine = state.engine.lock().await;
    Ok(Json(engine.predict_duration(&req.tasks)?))
}

async fn accuracy(State(state): State<AppState>) -> Result<Json<Vec<AccuracyPoint>>, ApiError> {
    let engine = state.engine.lock().await;
    Ok(Json(engine.compute_accuracy_series()?))
}

async fn append_logs(
    State(state): State<AppState>,
    Json(req): Json<LogRequest>,
) -> Result<Json<LogResponse>, ApiError> {
    tracing::info!("Log request: {} entries", req.logs.len());

    let engine = state.engine.lock().await;
    let appended = engine.append_records(&req.logs)?;
    Ok(Json(LogResponse { appended }))
}
