//! Axum route handlers for the Match API.

use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::matching::keywords::{analyze_keywords, KeywordOccurrence};
use crate::matching::normalizer::{normalize_job, normalize_judgment, normalize_resume};
use crate::models::report::{KeywordInsight, MatchResult};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

/// Resume/job arrive as raw JSON objects: they come out of the extraction
/// oracle and are coerced by the Document Normalizer, not trusted blindly.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareRequest {
    pub resume: Value,
    pub job: Value,
    #[serde(default)]
    pub oracle_judgment: Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordAnalysisRequest {
    pub resume: Value,
    pub job: Value,
    #[serde(default)]
    pub keyword_occurrences: Vec<KeywordOccurrence>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub resume_text: String,
    pub job_text: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/match/compare
///
/// Runs the deterministic compare pipeline over already-extracted documents
/// plus the oracle's judgment. No oracle call is made.
pub async fn handle_compare(
    Json(request): Json<CompareRequest>,
) -> Result<Json<MatchResult>, AppError> {
    let resume = normalize_resume(&request.resume)?;
    let job = normalize_job(&request.job)?;
    let judgment = normalize_judgment(&request.oracle_judgment)?;

    Ok(Json(crate::matching::compare(&resume, &job, &judgment)))
}

/// POST /api/v1/match/keywords
///
/// Classifies keyword strength and per-cluster coverage. Counts missing from
/// the request are computed from the documents' raw text.
pub async fn handle_keywords(
    Json(request): Json<KeywordAnalysisRequest>,
) -> Result<Json<KeywordInsight>, AppError> {
    let resume = normalize_resume(&request.resume)?;
    let job = normalize_job(&request.job)?;

    Ok(Json(analyze_keywords(
        &resume,
        &job,
        &request.keyword_occurrences,
    )))
}

/// POST /api/v1/match/analyze
///
/// Full pipeline from raw text: oracle extraction of both documents, oracle
/// judgment, then the deterministic compare. Oracle output is untrusted —
/// a non-object extraction or judgment payload is an oracle failure, kept
/// distinct from a legitimate low score.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<MatchResult>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation("resumeText cannot be empty".to_string()));
    }
    if request.job_text.trim().is_empty() {
        return Err(AppError::Validation("jobText cannot be empty".to_string()));
    }

    let raw_resume = state.oracle.extract_resume(&request.resume_text).await?;
    let resume = normalize_resume(&raw_resume)
        .map_err(|_| AppError::Oracle("resume extraction returned a non-object payload".to_string()))?;

    let raw_job = state.oracle.extract_job(&request.job_text).await?;
    let job = normalize_job(&raw_job)
        .map_err(|_| AppError::Oracle("job extraction returned a non-object payload".to_string()))?;

    let raw_judgment = state.oracle.judge(&resume, &job).await?;
    let judgment = normalize_judgment(&raw_judgment)
        .map_err(|_| AppError::Oracle("judgment was not a JSON object".to_string()))?;

    Ok(Json(crate::matching::compare(&resume, &job, &judgment)))
}
