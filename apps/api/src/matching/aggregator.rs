//! Match Aggregator — assembles the final `MatchResult` from the category
//! scores, the skill partition, and the oracle's narrative output.
//!
//! No scoring happens here. The aggregator's job is purely structural: apply
//! defaults for absent narrative fields and guarantee the MatchResult
//! invariants (unique, disjoint skill lists; overall score present even when
//! the oracle judgment was partial) hold on the way out.

use crate::matching::normalizer::dedupe_case_insensitive;
use crate::matching::skills::SkillMatch;
use crate::models::report::{Category, CategoryScore, MatchResult, OracleJudgment};

pub fn assemble_match_result(
    category_scores: Vec<CategoryScore>,
    skill_match: SkillMatch,
    judgment: &OracleJudgment,
) -> MatchResult {
    let overall_score = category_scores
        .iter()
        .find(|c| c.category == Category::OverallFit)
        .map(|c| c.score)
        .unwrap_or(0);

    // The matcher already emits a clean partition; re-deduping here keeps the
    // invariant intact even if a future caller assembles from partial parts.
    let matched_skills = dedupe_case_insensitive(skill_match.matched);
    let missing_skills: Vec<String> = dedupe_case_insensitive(skill_match.missing)
        .into_iter()
        .filter(|skill| {
            !matched_skills
                .iter()
                .any(|m| m.eq_ignore_ascii_case(skill))
        })
        .collect();

    MatchResult {
        overall_score,
        category_scores,
        matched_skills,
        missing_skills,
        strengths: judgment.strengths.clone(),
        improvement_areas: judgment.improvement_areas.clone(),
        summary: judgment.summary.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill_match(matched: &[&str], missing: &[&str]) -> SkillMatch {
        SkillMatch {
            matched: matched.iter().map(|s| s.to_string()).collect(),
            missing: missing.iter().map(|s| s.to_string()).collect(),
            score: 50,
            job_skill_count: matched.len() + missing.len(),
        }
    }

    #[test]
    fn test_overall_score_comes_from_overall_fit_category() {
        let result = assemble_match_result(
            vec![
                CategoryScore {
                    category: Category::Skills,
                    score: 20,
                },
                CategoryScore {
                    category: Category::OverallFit,
                    score: 75,
                },
            ],
            skill_match(&[], &[]),
            &OracleJudgment::default(),
        );
        assert_eq!(result.overall_score, 75);
    }

    #[test]
    fn test_overall_score_defaults_to_zero_without_overall_fit() {
        let result = assemble_match_result(
            vec![CategoryScore {
                category: Category::Skills,
                score: 90,
            }],
            skill_match(&["Rust"], &[]),
            &OracleJudgment::default(),
        );
        assert_eq!(result.overall_score, 0);
    }

    #[test]
    fn test_narrative_fields_default_to_empty() {
        let result = assemble_match_result(
            vec![],
            skill_match(&[], &[]),
            &OracleJudgment::default(),
        );
        assert!(result.strengths.is_empty());
        assert!(result.improvement_areas.is_empty());
        assert_eq!(result.summary, "");
    }

    #[test]
    fn test_narrative_fields_pass_through() {
        let judgment = OracleJudgment {
            overall_percentage: Some(80),
            strengths: vec!["Deep Rust experience".to_string()],
            improvement_areas: vec!["Add cloud projects".to_string()],
            summary: "Good fit overall.".to_string(),
        };
        let result = assemble_match_result(vec![], skill_match(&[], &[]), &judgment);
        assert_eq!(result.strengths, judgment.strengths);
        assert_eq!(result.improvement_areas, judgment.improvement_areas);
        assert_eq!(result.summary, judgment.summary);
    }

    #[test]
    fn test_skill_lists_are_deduped_and_disjoint() {
        // Deliberately malformed partition — the aggregator must repair it.
        let result = assemble_match_result(
            vec![],
            skill_match(&["React", "react"], &["AWS", "React", "aws"]),
            &OracleJudgment::default(),
        );
        assert_eq!(result.matched_skills, vec!["React"]);
        assert_eq!(result.missing_skills, vec!["AWS"]);
    }
}
