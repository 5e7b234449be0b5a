//! Skill Matcher — partitions a job's skill requirements into matched and
//! missing sets against a resume.
//!
//! Matching is case-folded on trimmed strings; output preserves the job
//! posting's original casing and its first-appearance order (required skills
//! before preferred). `matched` and `missing` always partition the job's
//! combined, deduplicated skill set exactly.

use std::collections::HashSet;

use serde::Serialize;

use crate::models::document::{JobDescription, Resume};

#[derive(Debug, Clone, Serialize)]
pub struct SkillMatch {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    /// round(100 * |matched| / |combined job set|); 0 when the job lists no
    /// skills — an empty requirement list is not a perfect match.
    pub score: u8,
    /// Size of the combined (required ∪ preferred) deduplicated job set.
    pub job_skill_count: usize,
}

pub fn match_skills(resume: &Resume, job: &JobDescription) -> SkillMatch {
    let resume_set: HashSet<String> = resume.all_skills().map(|s| fold(s)).collect();

    let mut seen = HashSet::new();
    let mut matched = Vec::new();
    let mut missing = Vec::new();

    for skill in job.required_skills.iter().chain(job.preferred_skills.iter()) {
        let key = fold(skill);
        if key.is_empty() || !seen.insert(key.clone()) {
            continue;
        }
        if resume_set.contains(&key) {
            matched.push(skill.trim().to_string());
        } else {
            missing.push(skill.trim().to_string());
        }
    }

    let total = matched.len() + missing.len();
    let score = if total == 0 {
        0
    } else {
        (100.0 * matched.len() as f64 / total as f64).round() as u8
    };

    SkillMatch {
        matched,
        missing,
        score,
        job_skill_count: total,
    }
}

fn fold(skill: &str) -> String {
    skill.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::SkillSet;

    fn resume_with_skills(technical: &[&str], soft: &[&str]) -> Resume {
        Resume {
            skills: SkillSet {
                technical: technical.iter().map(|s| s.to_string()).collect(),
                soft: soft.iter().map(|s| s.to_string()).collect(),
            },
            ..Default::default()
        }
    }

    fn job_with_skills(required: &[&str], preferred: &[&str]) -> JobDescription {
        JobDescription {
            required_skills: required.iter().map(|s| s.to_string()).collect(),
            preferred_skills: preferred.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_react_node_vs_react_aws_docker() {
        let resume = resume_with_skills(&["React", "Node.js"], &[]);
        let job = job_with_skills(&["React", "AWS"], &["Docker"]);

        let result = match_skills(&resume, &job);
        assert_eq!(result.matched, vec!["React"]);
        assert_eq!(result.missing, vec!["AWS", "Docker"]);
        assert_eq!(result.score, 33);
    }

    #[test]
    fn test_empty_job_skill_set_scores_zero_not_hundred() {
        let resume = resume_with_skills(&["React"], &["Communication"]);
        let job = job_with_skills(&[], &[]);

        let result = match_skills(&resume, &job);
        assert_eq!(result.score, 0);
        assert_eq!(result.job_skill_count, 0);
        assert!(result.matched.is_empty());
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_matched_and_missing_partition_the_job_set() {
        let resume = resume_with_skills(&["rust", "SQL"], &["Leadership"]);
        let job = job_with_skills(&["Rust", "Kubernetes", "SQL"], &["Leadership", "Go"]);

        let result = match_skills(&resume, &job);
        assert_eq!(result.matched.len() + result.missing.len(), result.job_skill_count);

        let matched: HashSet<String> = result.matched.iter().map(|s| s.to_lowercase()).collect();
        let missing: HashSet<String> = result.missing.iter().map(|s| s.to_lowercase()).collect();
        assert!(matched.is_disjoint(&missing));
        assert_eq!(result.matched, vec!["Rust", "SQL", "Leadership"]);
        assert_eq!(result.missing, vec!["Kubernetes", "Go"]);
    }

    #[test]
    fn test_matching_is_case_insensitive_but_keeps_job_casing() {
        let resume = resume_with_skills(&["POSTGRESQL"], &[]);
        let job = job_with_skills(&["PostgreSQL"], &[]);

        let result = match_skills(&resume, &job);
        assert_eq!(result.matched, vec!["PostgreSQL"]);
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_duplicate_across_required_and_preferred_counted_once() {
        let resume = resume_with_skills(&["React"], &[]);
        let job = job_with_skills(&["React", "AWS"], &["react"]);

        let result = match_skills(&resume, &job);
        assert_eq!(result.job_skill_count, 2);
        assert_eq!(result.matched, vec!["React"]);
        assert_eq!(result.score, 50);
    }

    #[test]
    fn test_soft_skills_count_toward_matching() {
        let resume = resume_with_skills(&[], &["Communication"]);
        let job = job_with_skills(&["Communication"], &[]);

        assert_eq!(match_skills(&resume, &job).score, 100);
    }

    #[test]
    fn test_whitespace_only_job_skills_are_ignored() {
        let resume = resume_with_skills(&["Rust"], &[]);
        let job = job_with_skills(&["  ", "Rust"], &[]);

        let result = match_skills(&resume, &job);
        assert_eq!(result.job_skill_count, 1);
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_score_rounds_half_up() {
        // 1 of 8 = 12.5 → 13
        let resume = resume_with_skills(&["A"], &[]);
        let job = job_with_skills(&["A", "B", "C", "D", "E", "F", "G", "H"], &[]);

        assert_eq!(match_skills(&resume, &job).score, 13);
    }

    #[test]
    fn test_score_always_within_bounds() {
        let resume = resume_with_skills(&["A", "B", "C"], &[]);
        let job = job_with_skills(&["A", "B", "C"], &[]);

        let result = match_skills(&resume, &job);
        assert!(result.score <= 100);
        assert_eq!(result.score, 100);
    }
}
