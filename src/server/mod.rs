use std::sync::Arc;

use anyhow::Context;
use axum::{
    Json, Router,
    extract::State,
    http::{HeaderName, Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::analysis::analyze_transcript;
use crate::models::AnalysisReport;
use crate::store::RecordStore;

const DEFAULT_PATIENT_NAME: &str = "Patient";

/// Shared state for the HTTP handlers
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn RecordStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Raw dialogue text; required and must be non-empty
    pub transcript: Option<String>,
    /// Defaults to "Patient" when absent or blank
    #[serde(rename = "patientName")]
    pub patient_name: Option<String>,
}

/// Errors surfaced at the request boundary; the pipeline itself is total
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Transcript is required")]
    EmptyTranscript,
    #[error("Failed to process transcript")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::EmptyTranscript => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Transcript is required" })),
            )
                .into_response(),
            ApiError::Internal(source) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Failed to process transcript",
                    "details": source.to_string(),
                })),
            )
                .into_response(),
        }
    }
}

/// Build the application router
///
/// CORS is permissive: any origin, the standard verbs, and the client
/// identification headers the browser frontend sends. Preflight OPTIONS
/// requests are answered by the CORS layer with an empty 200.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
        ]);

    Router::new()
        .route("/health", get(health))
        .route("/analyze", post(analyze))
        .layer(cors)
        .with_state(state)
}

/// Bind and serve the API until the process is stopped
pub async fn serve(addr: &str, state: AppState) -> anyhow::Result<()> {
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on {}", addr);
    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisReport>, ApiError> {
    let transcript = request.transcript.unwrap_or_default();
    if transcript.trim().is_empty() {
        return Err(ApiError::EmptyTranscript);
    }

    let patient_name = request
        .patient_name
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_PATIENT_NAME.to_string());

    let report = analyze_transcript(&transcript, &patient_name);

    // The primary transcript write is fatal on failure; the derived records
    // are best-effort secondary writes
    let transcript_id = state.store.insert_transcript(&patient_name, &transcript)?;

    if let Err(err) = state
        .store
        .insert_medical_analysis(transcript_id, &report.medical_analysis)
    {
        warn!("Failed to store medical analysis for {}: {:#}", transcript_id, err);
    }
    if let Err(err) = state
        .store
        .insert_sentiment(transcript_id, &report.sentiment_analysis)
    {
        warn!("Failed to store sentiment for {}: {:#}", transcript_id, err);
    }
    if let Err(err) = state.store.insert_soap_note(transcript_id, &report.soap_note) {
        warn!("Failed to store SOAP note for {}: {:#}", transcript_id, err);
    }

    info!(
        "Analyzed transcript {} ({} chars)",
        transcript_id,
        transcript.len()
    );

    Ok(Json(report))
}
