//! Document Normalizer — coerces raw extraction-oracle JSON into canonical
//! `Resume` / `JobDescription` entities.
//!
//! The oracle's output is untrusted: fields may be missing, null, or carry
//! the wrong type. Everything optional defaults (missing arrays → empty vec,
//! missing strings → empty string, wrong-typed values → default). The only
//! hard failure is a payload that is not a JSON object.

use serde_json::{Map, Value};

use crate::errors::AppError;
use crate::models::document::{
    EducationEntry, ExperienceEntry, JobDescription, PersonalInfo, Resume, SkillSet,
};
use crate::models::report::OracleJudgment;

/// Coerces a raw oracle payload into a `Resume`. Pure transform, no I/O.
pub fn normalize_resume(value: &Value) -> Result<Resume, AppError> {
    let obj = value
        .as_object()
        .ok_or_else(|| AppError::InvalidInput("resume payload must be a JSON object".to_string()))?;

    let personal = obj
        .get("personalInfo")
        .and_then(Value::as_object)
        .map(|p| PersonalInfo {
            name: str_field(p, "name"),
            email: str_field(p, "email"),
            phone: str_field(p, "phone"),
            location: str_field(p, "location"),
        })
        .unwrap_or_default();

    let skills = obj
        .get("skills")
        .and_then(Value::as_object)
        .map(|s| SkillSet {
            technical: skill_list(s, "technical"),
            soft: skill_list(s, "soft"),
        })
        .unwrap_or_default();

    let experience = object_list(obj, "experience")
        .into_iter()
        .map(|e| ExperienceEntry {
            title: str_field(e, "title"),
            company: str_field(e, "company"),
            start_date: str_field(e, "startDate"),
            end_date: opt_str_field(e, "endDate"),
            description: str_field(e, "description"),
        })
        .collect();

    let education = object_list(obj, "education")
        .into_iter()
        .map(|e| EducationEntry {
            institution: str_field(e, "institution"),
            degree: str_field(e, "degree"),
            field: str_field(e, "field"),
            start_date: str_field(e, "startDate"),
            end_date: opt_str_field(e, "endDate"),
        })
        .collect();

    Ok(Resume {
        personal_info: personal,
        skills,
        experience,
        education,
        raw_text: opt_str_field(obj, "rawText"),
    })
}

/// Coerces a raw oracle payload into a `JobDescription`. Pure transform.
pub fn normalize_job(value: &Value) -> Result<JobDescription, AppError> {
    let obj = value.as_object().ok_or_else(|| {
        AppError::InvalidInput("job description payload must be a JSON object".to_string())
    })?;

    Ok(JobDescription {
        title: str_field(obj, "title"),
        company: str_field(obj, "company"),
        location: str_field(obj, "location"),
        description: str_field(obj, "description"),
        required_skills: skill_list(obj, "requiredSkills"),
        preferred_skills: skill_list(obj, "preferredSkills"),
        responsibilities: string_list(obj, "responsibilities"),
        benefits: string_list(obj, "benefits"),
        raw_text: opt_str_field(obj, "rawText"),
    })
}

/// Coerces a raw oracle judgment. `null` or a missing value is a valid empty
/// judgment; any other non-object payload is rejected. The percentage is
/// clamped into [0,100] and non-numeric values are dropped rather than
/// misread as a legitimate score.
pub fn normalize_judgment(value: &Value) -> Result<OracleJudgment, AppError> {
    let obj = match value {
        Value::Null => return Ok(OracleJudgment::default()),
        Value::Object(obj) => obj,
        _ => {
            return Err(AppError::InvalidInput(
                "oracle judgment must be a JSON object".to_string(),
            ))
        }
    };

    let overall_percentage = obj
        .get("overallPercentage")
        .and_then(Value::as_f64)
        .map(|p| p.round().clamp(0.0, 100.0) as u8);

    Ok(OracleJudgment {
        overall_percentage,
        strengths: string_list(obj, "strengths"),
        improvement_areas: string_list(obj, "improvementAreas"),
        summary: str_field(obj, "summary"),
    })
}

fn str_field(obj: &Map<String, Value>, key: &str) -> String {
    obj.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or_default()
        .to_string()
}

/// Some extracted fields (end dates, raw text) are meaningfully absent, not
/// just empty — keep the distinction.
fn opt_str_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Array of strings; non-string elements are dropped, entries trimmed.
fn string_list(obj: &Map<String, Value>, key: &str) -> Vec<String> {
    obj.get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Like `string_list`, plus the skill-list invariant: entries unique
/// case-insensitively, first-seen casing kept.
fn skill_list(obj: &Map<String, Value>, key: &str) -> Vec<String> {
    dedupe_case_insensitive(string_list(obj, key))
}

fn object_list<'a>(obj: &'a Map<String, Value>, key: &str) -> Vec<&'a Map<String, Value>> {
    obj.get(key)
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_object).collect())
        .unwrap_or_default()
}

pub(crate) fn dedupe_case_insensitive(items: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.to_lowercase()))
        .collect()
}
