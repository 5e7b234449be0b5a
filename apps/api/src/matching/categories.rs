//! Category Scorer — derives per-category scores from the skill match, the
//! oracle's holistic judgment, and deterministic document signals.
//!
//! A category is emitted only when its input exists: Skills needs at least
//! one job skill, the other three need the oracle's `overallPercentage`.
//! Experience and Education adjust the overall score by a small bounded
//! signal computed from the documents themselves (tenure vs required years,
//! degree level vs required degree). Signals are capped at ±10 so the
//! oracle's judgment stays the dominant term.

use chrono::{Datelike, NaiveDate, Utc};
use regex::Regex;

use crate::matching::skills::SkillMatch;
use crate::models::document::{JobDescription, Resume};
use crate::models::report::{Category, CategoryScore, OracleJudgment};

const SIGNAL_CAP: i64 = 10;

pub fn score_categories(
    skill_match: &SkillMatch,
    judgment: &OracleJudgment,
    resume: &Resume,
    job: &JobDescription,
) -> Vec<CategoryScore> {
    let mut scores = Vec::new();

    if skill_match.job_skill_count > 0 {
        scores.push(CategoryScore {
            category: Category::Skills,
            score: skill_match.score,
        });
    }

    if let Some(overall) = judgment.overall_percentage {
        let overall = overall.min(100);
        scores.push(CategoryScore {
            category: Category::Experience,
            score: adjusted(overall, experience_signal(resume, job)),
        });
        scores.push(CategoryScore {
            category: Category::Education,
            score: adjusted(overall, education_signal(resume, job)),
        });
        scores.push(CategoryScore {
            category: Category::OverallFit,
            score: overall,
        });
    }

    scores
}

fn adjusted(overall: u8, signal: i64) -> u8 {
    (overall as i64 + signal).clamp(0, 100) as u8
}

// ────────────────────────────────────────────────────────────────────────────
// Experience signal: resume tenure vs required years
// ────────────────────────────────────────────────────────────────────────────

/// ±2 per year of difference between total resume tenure and the `N+ years`
/// figure stated in the job description, capped at ±10. Zero when the job
/// states no figure.
fn experience_signal(resume: &Resume, job: &JobDescription) -> i64 {
    let required = match required_years(job) {
        Some(years) => years,
        None => return 0,
    };
    let actual = total_tenure_months(resume) / 12.0;
    ((actual - required) * 2.0).round().clamp(-(SIGNAL_CAP as f64), SIGNAL_CAP as f64) as i64
}

/// First "N+ years" / "N years" figure in the job description, checking the
/// structured description field before falling back to raw text.
fn required_years(job: &JobDescription) -> Option<f64> {
    let pattern = Regex::new(r"(?i)(\d{1,2})\s*\+?\s*(?:years?|yrs?)").expect("valid regex");
    [Some(job.description.as_str()), job.raw_text.as_deref()]
        .into_iter()
        .flatten()
        .find_map(|text| {
            pattern
                .captures(text)
                .and_then(|c| c.get(1))
                .and_then(|m| m.as_str().parse::<f64>().ok())
        })
}

/// Sum of experience durations in months. Open-ended entries (no end date,
/// or "Present") run to today. Entries with unparseable dates contribute 0.
fn total_tenure_months(resume: &Resume) -> f64 {
    let today = Utc::now().naive_utc().date();
    resume
        .experience
        .iter()
        .filter_map(|entry| {
            let start = parse_date(&entry.start_date)?;
            let end = match entry.end_date.as_deref() {
                None => today,
                Some(raw) if is_open_ended(raw) => today,
                Some(raw) => parse_date(raw)?,
            };
            Some(months_between(start, end).max(0.0))
        })
        .sum()
}

fn is_open_ended(raw: &str) -> bool {
    matches!(
        raw.trim().to_lowercase().as_str(),
        "" | "present" | "current" | "now" | "ongoing"
    )
}

/// Tolerant date parsing for extracted resume dates: full dates, year-month,
/// month-name forms, and bare years.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    for fmt in ["%Y-%m-%d", "%m/%d/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(raw, fmt) {
            return Some(date);
        }
    }
    // Day-less forms get a synthetic first-of-month/year.
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d") {
        return Some(date);
    }
    for fmt in ["%b %Y %d", "%B %Y %d"] {
        if let Ok(date) = NaiveDate::parse_from_str(&format!("{raw} 1"), fmt) {
            return Some(date);
        }
    }
    NaiveDate::parse_from_str(&format!("{raw}-01-01"), "%Y-%m-%d").ok()
}

fn months_between(start: NaiveDate, end: NaiveDate) -> f64 {
    let years = end.year() - start.year();
    let months = end.month() as i32 - start.month() as i32;
    let total = years * 12 + months;
    let day_frac = (end.day() as f64 - start.day() as f64) / 30.0;
    total as f64 + day_frac
}

// ────────────────────────────────────────────────────────────────────────────
// Education signal: degree rank vs required degree
// ────────────────────────────────────────────────────────────────────────────

/// ±5 per degree level between the resume's highest degree and the level the
/// job asks for, capped at ±10. Zero when the job names no degree.
fn education_signal(resume: &Resume, job: &JobDescription) -> i64 {
    let required = match job_degree_rank(job) {
        Some(rank) => rank,
        None => return 0,
    };
    let actual = resume
        .education
        .iter()
        .filter_map(|entry| degree_rank(&entry.degree))
        .max()
        .unwrap_or(0);
    ((actual - required) * 5).clamp(-SIGNAL_CAP, SIGNAL_CAP)
}

fn job_degree_rank(job: &JobDescription) -> Option<i64> {
    degree_rank(&job.description)
        .or_else(|| job.raw_text.as_deref().and_then(degree_rank))
}

/// Highest degree rank mentioned in the text, if any.
/// Doctorate 4 > master 3 > bachelor 2 > associate 1. Token scan, not
/// substring — "combat" must not read as an MBA. Dots are stripped first so
/// "Ph.D." and "B.S." tokenize to their plain forms.
fn degree_rank(text: &str) -> Option<i64> {
    let text = text.to_lowercase().replace('.', "");
    text.split(|c: char| !c.is_alphanumeric())
        .filter_map(|token| match token {
            "phd" | "doctorate" | "doctoral" => Some(4),
            "master" | "masters" | "msc" | "mba" => Some(3),
            "bachelor" | "bachelors" | "bsc" | "bs" | "ba" => Some(2),
            "associate" | "associates" => Some(1),
            _ => None,
        })
        .max()
}
