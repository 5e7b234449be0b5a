//! Output entities of the match pipeline: MatchResult and KeywordInsight.
//!
//! Both are created fresh per request and never mutated after assembly —
//! downstream consumers (cover letter, feedback generation) read them as
//! plain input.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Scoring category. Serialized as its display name ("Overall Fit", not
/// "OverallFit") to match the wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Skills,
    Experience,
    Education,
    #[serde(rename = "Overall Fit")]
    OverallFit,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: Category,
    pub score: u8,
}

/// The normalized comparison verdict for one resume/job pair.
///
/// Invariants: `overall_score` and every category score are in [0,100];
/// `matched_skills` and `missing_skills` are unique and disjoint; categories
/// with absent inputs are omitted, never emitted with a placeholder.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub overall_score: u8,
    pub category_scores: Vec<CategoryScore>,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub strengths: Vec<String>,
    pub improvement_areas: Vec<String>,
    pub summary: String,
}

/// Per-keyword representation tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strength {
    Strong,
    Weak,
    Missing,
}

/// Aggregate status of a keyword cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Coverage {
    Full,
    Partial,
    None,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordReport {
    pub word: String,
    pub cluster: String,
    pub strength: Strength,
    pub resume_count: u32,
    pub jd_count: u32,
}

/// Keyword-level insight report. Every keyword's cluster appears in
/// `clusters`; `coverage` holds exactly one entry per cluster. BTreeMap keeps
/// the serialized key order stable across runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordInsight {
    pub keywords: Vec<KeywordReport>,
    pub clusters: Vec<String>,
    pub coverage: BTreeMap<String, Coverage>,
}

/// The oracle's holistic judgment of a resume/job pair. All fields optional —
/// absent narrative fields default to empty, an absent percentage causes the
/// dependent categories to be omitted downstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OracleJudgment {
    pub overall_percentage: Option<u8>,
    pub strengths: Vec<String>,
    pub improvement_areas: Vec<String>,
    pub summary: String,
}
