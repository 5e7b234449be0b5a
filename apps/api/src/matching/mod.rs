// Match & Keyword Insight Engine.
// Deterministic post-processing of extracted documents plus the oracle's
// judgment — set operations, scoring formulas, classification rules. All
// components are pure, synchronous, stateless functions over their inputs.

pub mod aggregator;
pub mod categories;
pub mod handlers;
pub mod keywords;
pub mod normalizer;
pub mod skills;

use crate::models::document::{JobDescription, Resume};
use crate::models::report::{MatchResult, OracleJudgment};

/// Runs the full compare pipeline: skill match → category scores → assembly.
pub fn compare(resume: &Resume, job: &JobDescription, judgment: &OracleJudgment) -> MatchResult {
    let skill_match = skills::match_skills(resume, job);
    let category_scores = categories::score_categories(&skill_match, judgment, resume, job);
    aggregator::assemble_match_result(category_scores, skill_match, judgment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::SkillSet;
    use crate::models::report::Category;

    #[test]
    fn test_compare_end_to_end() {
        let resume = Resume {
            skills: SkillSet {
                technical: vec!["React".to_string(), "Node.js".to_string()],
                soft: vec![],
            },
            ..Default::default()
        };
        let job = JobDescription {
            required_skills: vec!["React".to_string(), "AWS".to_string()],
            preferred_skills: vec!["Docker".to_string()],
            ..Default::default()
        };
        let judgment = OracleJudgment {
            overall_percentage: Some(65),
            strengths: vec!["Solid frontend background".to_string()],
            improvement_areas: vec!["No cloud exposure".to_string()],
            summary: "Partial fit.".to_string(),
        };

        let result = compare(&resume, &job, &judgment);

        assert_eq!(result.matched_skills, vec!["React"]);
        assert_eq!(result.missing_skills, vec!["AWS", "Docker"]);
        assert_eq!(result.overall_score, 65);
        assert_eq!(result.category_scores.len(), 4);
        assert_eq!(result.summary, "Partial fit.");

        let skills_score = result
            .category_scores
            .iter()
            .find(|c| c.category == Category::Skills)
            .unwrap()
            .score;
        assert_eq!(skills_score, 33);
    }

    #[test]
    fn test_compare_without_judgment_still_computes_skills() {
        let resume = Resume::default();
        let job = JobDescription {
            required_skills: vec!["Rust".to_string()],
            ..Default::default()
        };

        let result = compare(&resume, &job, &OracleJudgment::default());

        // "computed, and the match is weak" — not an error, not fabricated.
        assert_eq!(result.overall_score, 0);
        assert_eq!(result.category_scores.len(), 1);
        assert_eq!(result.category_scores[0].category, Category::Skills);
        assert_eq!(result.missing_skills, vec!["Rust"]);
    }
}
