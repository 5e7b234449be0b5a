//! Keyword Insight Engine — classifies job-relevant keywords by how well the
//! resume represents them and rolls the classification up per cluster.
//!
//! Classification is a pure function of `(resume_count, jd_count)`:
//!
//! 1. `jd_count == 0` → the keyword is not job-relevant and is dropped.
//! 2. `resume_count == 0` → `Missing`.
//! 3. `resume_count < ceil(jd_count / 3)` → `Weak`. The JD leans on the term
//!    (mentions it 3+ times for the threshold to bite) while the resume
//!    barely touches it.
//! 4. Otherwise → `Strong`.
//!
//! Occurrence counts come from the caller (oracle-supplied); a count that is
//! absent is computed by case-insensitive substring counting over the
//! corresponding document's raw text. Cluster assignment is always caller
//! input — the engine never invents clusters.

use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;

use crate::models::document::{JobDescription, Resume};
use crate::models::report::{Coverage, KeywordInsight, KeywordReport, Strength};

/// One candidate keyword with its cluster assignment and optional counts.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordOccurrence {
    pub word: String,
    pub cluster: String,
    #[serde(default)]
    pub resume_count: Option<u32>,
    #[serde(default)]
    pub jd_count: Option<u32>,
}

pub fn analyze_keywords(
    resume: &Resume,
    job: &JobDescription,
    occurrences: &[KeywordOccurrence],
) -> KeywordInsight {
    let mut seen = BTreeSet::new();
    let mut keywords = Vec::new();

    for occurrence in occurrences {
        let word = occurrence.word.trim();
        if word.is_empty() || !seen.insert(word.to_lowercase()) {
            continue;
        }

        let resume_count = occurrence
            .resume_count
            .unwrap_or_else(|| count_occurrences(resume.raw_text.as_deref(), word));
        let jd_count = occurrence
            .jd_count
            .unwrap_or_else(|| count_occurrences(job.raw_text.as_deref(), word));

        let strength = match classify(resume_count, jd_count) {
            Some(strength) => strength,
            None => continue, // not job-relevant
        };

        keywords.push(KeywordReport {
            word: word.to_string(),
            cluster: occurrence.cluster.trim().to_string(),
            strength,
            resume_count,
            jd_count,
        });
    }

    let clusters: Vec<String> = keywords
        .iter()
        .map(|k| k.cluster.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let coverage = clusters
        .iter()
        .map(|cluster| {
            let strengths: Vec<Strength> = keywords
                .iter()
                .filter(|k| &k.cluster == cluster)
                .map(|k| k.strength)
                .collect();
            (cluster.clone(), cluster_coverage(&strengths))
        })
        .collect::<BTreeMap<_, _>>();

    KeywordInsight {
        keywords,
        clusters,
        coverage,
    }
}

/// `None` means the keyword is not job-relevant and must be dropped.
fn classify(resume_count: u32, jd_count: u32) -> Option<Strength> {
    if jd_count == 0 {
        return None;
    }
    if resume_count == 0 {
        return Some(Strength::Missing);
    }
    if resume_count < jd_count.div_ceil(3) {
        return Some(Strength::Weak);
    }
    Some(Strength::Strong)
}

/// Full iff every keyword is Strong, None iff every keyword is Missing,
/// Partial otherwise.
fn cluster_coverage(strengths: &[Strength]) -> Coverage {
    if strengths.iter().all(|&s| s == Strength::Strong) {
        Coverage::Full
    } else if strengths.iter().all(|&s| s == Strength::Missing) {
        Coverage::None
    } else {
        Coverage::Partial
    }
}

/// Case-insensitive, non-overlapping substring count. Missing text counts 0.
fn count_occurrences(text: Option<&str>, term: &str) -> u32 {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return 0;
    }
    match text {
        Some(text) => text.to_lowercase().matches(&term).count() as u32,
        None => 0,
    }
}
