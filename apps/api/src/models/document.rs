//! Canonical document entities produced by the Document Normalizer.
//!
//! Both entities are fully defaulted: the normalizer guarantees every field
//! is present (empty string / empty vec when the source payload omitted it),
//! so downstream components never deal with missing data.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

/// Skill lists hold unique, trimmed strings. Uniqueness is case-insensitive;
/// the first-seen casing is kept.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SkillSet {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Resume {
    pub personal_info: PersonalInfo,
    pub skills: SkillSet,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub raw_text: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct JobDescription {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
    pub responsibilities: Vec<String>,
    pub benefits: Vec<String>,
    pub raw_text: Option<String>,
}

impl Resume {
    /// All resume skills, technical then soft, in list order.
    pub fn all_skills(&self) -> impl Iterator<Item = &String> {
        self.skills.technical.iter().chain(self.skills.soft.iter())
    }
}
