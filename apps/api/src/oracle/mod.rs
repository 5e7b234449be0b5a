//! Oracle boundary — the external LLM collaborator that extracts structured
//! documents from free text and produces the holistic compatibility
//! judgment.
//!
//! Modeled as an injected capability (`Arc<dyn ExtractionOracle>` in
//! `AppState`) so the pipeline is testable with deterministic fakes instead
//! of live network calls. Everything the oracle returns is untrusted JSON:
//! handlers push it through the Document Normalizer before it reaches the
//! match pipeline, and a failed or malformed response surfaces as
//! `AppError::Oracle` — never as a zero score.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::AppError;
use crate::models::document::{JobDescription, Resume};

pub mod client;
pub mod prompts;

pub use client::{LlmClient, MODEL};

/// The extraction/judgment collaborator. The core performs no retry or
/// caching at this seam — retry policy lives inside the implementation.
#[async_trait]
pub trait ExtractionOracle: Send + Sync {
    /// Extracts a structured resume payload from raw text.
    async fn extract_resume(&self, resume_text: &str) -> Result<Value, AppError>;

    /// Extracts a structured job description payload from raw text.
    async fn extract_job(&self, job_text: &str) -> Result<Value, AppError>;

    /// Produces the holistic compatibility judgment for a document pair.
    async fn judge(&self, resume: &Resume, job: &JobDescription) -> Result<Value, AppError>;
}

/// Live oracle backed by the Claude Messages API.
pub struct LlmOracle {
    client: LlmClient,
}

impl LlmOracle {
    pub fn new(client: LlmClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ExtractionOracle for LlmOracle {
    async fn extract_resume(&self, resume_text: &str) -> Result<Value, AppError> {
        let prompt = prompts::RESUME_EXTRACT_TEMPLATE.replace("{resume_text}", resume_text);
        self.client
            .call_json::<Value>(&prompt, prompts::RESUME_EXTRACT_SYSTEM)
            .await
            .map_err(|e| AppError::Oracle(format!("resume extraction failed: {e}")))
    }

    async fn extract_job(&self, job_text: &str) -> Result<Value, AppError> {
        let prompt = prompts::JOB_EXTRACT_TEMPLATE.replace("{job_text}", job_text);
        self.client
            .call_json::<Value>(&prompt, prompts::JOB_EXTRACT_SYSTEM)
            .await
            .map_err(|e| AppError::Oracle(format!("job extraction failed: {e}")))
    }

    async fn judge(&self, resume: &Resume, job: &JobDescription) -> Result<Value, AppError> {
        let resume_json = serde_json::to_string_pretty(resume)
            .map_err(|e| AppError::Oracle(format!("failed to serialize resume: {e}")))?;
        let job_json = serde_json::to_string_pretty(job)
            .map_err(|e| AppError::Oracle(format!("failed to serialize job: {e}")))?;

        let prompt = prompts::JUDGE_TEMPLATE
            .replace("{resume_json}", &resume_json)
            .replace("{job_json}", &job_json);

        self.client
            .call_json::<Value>(&prompt, prompts::JUDGE_SYSTEM)
            .await
            .map_err(|e| AppError::Oracle(format!("compatibility judgment failed: {e}")))
    }
}
