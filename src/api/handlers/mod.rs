use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::engine::{CalculatorEngine, EngineError};
use crate::models::*;

// ============================================================
// Envelopes
// ============================================================

/// Wraps every successful payload as `{"success": true, ...payload}`.
#[derive(Debug, Serialize)]
pub struct Success<T> {
    success: bool,
    #[serde(flatten)]
    data: T,
}

impl<T> Success<T> {
    fn new(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data,
        })
    }
}

#[derive(Debug, Serialize)]
struct Failure {
    success: bool,
    error: String,
}

// ============================================================
// Error Handling
// ============================================================

/// Everything a handler can fail with. All of it is the client's fault and
/// is reported as a 400 with `{"success": false, "error": <message>}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Invalid request body: {0}")]
    Body(#[from] JsonRejection),

    #[error("Invalid query string: {0}")]
    Query(#[from] QueryRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error = match &self {
            Self::Engine(e) => e.to_string(),
            Self::Body(rejection) => format!("Invalid request body: {}", rejection.body_text()),
            Self::Query(rejection) => {
                format!("Invalid query string: {}", rejection.body_text())
            }
        };
        tracing::warn!("Rejected calculation: {}", error);
        (
            StatusCode::BAD_REQUEST,
            Json(Failure {
                success: false,
                error,
            }),
        )
            .into_response()
    }
}

type ApiResult<T> = Result<Json<Success<T>>, ApiError>;

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Calculations
// ============================================================

pub async fn calculate(
    State(engine): State<CalculatorEngine>,
    input: Result<Json<CalculateInput>, JsonRejection>,
) -> ApiResult<CalculateResponse> {
    let Json(input) = input?;
    Ok(Success::new(engine.calculate(input)?))
}

pub async fn scientific(
    State(engine): State<CalculatorEngine>,
    input: Result<Json<ScientificInput>, JsonRejection>,
) -> ApiResult<ScientificResponse> {
    let Json(input) = input?;
    Ok(Success::new(engine.scientific(input)?))
}

pub async fn memory(
    State(engine): State<CalculatorEngine>,
    input: Result<Json<MemoryInput>, JsonRejection>,
) -> ApiResult<MemoryResponse> {
    let Json(input) = input?;
    Ok(Success::new(engine.memory(input)?))
}

pub async fn convert(
    State(engine): State<CalculatorEngine>,
    input: Result<Json<ConvertInput>, JsonRejection>,
) -> ApiResult<ConvertResponse> {
    let Json(input) = input?;
    Ok(Success::new(engine.convert(input)?))
}

// ============================================================
// History
// ============================================================

pub async fn history(
    State(engine): State<CalculatorEngine>,
    query: Result<Query<HistoryQuery>, QueryRejection>,
) -> ApiResult<HistoryResponse> {
    let Query(query) = query?;
    Ok(Success::new(engine.history_query(query)))
}

pub async fn clear_history(
    State(engine): State<CalculatorEngine>,
) -> Json<Success<ClearHistoryResponse>> {
    Success::new(engine.history_clear())
}
