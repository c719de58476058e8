//! ATS Scoring: pluggable scorer that measures a candidate profile against a JD.
//!
//! Default: `KeywordAtsScorer` (pure-Rust, deterministic, no shared state).
//! Pipeline: extract keywords → flatten profile → classify → score + feedback.
//!
//! `AppState` holds an `Arc<dyn AtsScorer>`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::profile::CandidateProfile;
use crate::scoring::feedback::{build_feedback, NO_JOB_DESCRIPTION};
use crate::scoring::keywords::{extract_keywords, KeywordSet};
use crate::scoring::resume_text::flatten_profile;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// Score and feedback returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u32, // 0 – 100
    pub feedback: Vec<String>,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
}

impl ScoreResult {
    /// Result for a request that carried no job description.
    pub fn no_job_description() -> Self {
        Self {
            score: 0,
            feedback: vec![NO_JOB_DESCRIPTION.to_string()],
            matched_keywords: vec![],
            missing_keywords: vec![],
        }
    }
}

/// JD terms split by whether the resume text contains them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordMatches {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

impl KeywordMatches {
    pub fn total(&self) -> usize {
        self.matched.len() + self.missing.len()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap scoring backends without touching the handlers.
pub trait AtsScorer: Send + Sync {
    fn score(&self, profile: &CandidateProfile, job_description: Option<&str>) -> ScoreResult;

    /// Short label reported in logs.
    fn backend(&self) -> &'static str;
}

/// Substring keyword scorer. Stateless; safe to share across requests.
pub struct KeywordAtsScorer;

impl AtsScorer for KeywordAtsScorer {
    fn score(&self, profile: &CandidateProfile, job_description: Option<&str>) -> ScoreResult {
        score_resume(profile, job_description)
    }

    fn backend(&self) -> &'static str {
        "keyword"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Scores `profile` against `job_description`. An absent or empty JD yields the
/// zero-score sentinel result.
pub fn score_resume(profile: &CandidateProfile, job_description: Option<&str>) -> ScoreResult {
    let Some(job_description) = job_description.filter(|jd| !jd.is_empty()) else {
        return ScoreResult::no_job_description();
    };

    let keywords = extract_keywords(job_description);
    let resume_text = flatten_profile(profile);
    let matches = classify_keywords(&keywords, &resume_text);
    let score = compute_score(matches.matched.len(), matches.total());

    debug!(
        keywords = keywords.keywords.len(),
        phrases = keywords.phrases.len(),
        matched = matches.matched.len(),
        score,
        "scored resume against job description"
    );

    let feedback = build_feedback(profile, &resume_text, &matches, score);

    ScoreResult {
        score,
        feedback,
        matched_keywords: matches.matched,
        missing_keywords: matches.missing,
    }
}

/// Partitions the keyword set by substring presence in `resume_text`, preserving order.
pub fn classify_keywords(keywords: &KeywordSet, resume_text: &str) -> KeywordMatches {
    let (matched, missing): (Vec<String>, Vec<String>) = keywords
        .terms()
        .map(str::to_string)
        .partition(|term| resume_text.contains(term.as_str()));
    KeywordMatches { matched, missing }
}

/// Percentage of matched terms, rounded half-to-even. Zero when there are no terms.
pub fn compute_score(matched: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((matched as f64 / total as f64) * 100.0).round_ties_even() as u32
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::{Experience, Responsibility, SkillSections};

    const SCENARIO_JD: &str =
        "We need a Python developer with Python experience in cloud and cloud systems.";

    fn profile_with_summary(summary: &str) -> CandidateProfile {
        CandidateProfile {
            summary: Some(summary.to_string()),
            ..Default::default()
        }
    }

    fn experience_with(responsibility: &str) -> CandidateProfile {
        CandidateProfile {
            experience: Some(vec![Experience {
                title: Some("Engineer".to_string()),
                responsibilities: vec![Responsibility::Text(responsibility.to_string())],
                ..Default::default()
            }]),
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_job_description_returns_sentinel() {
        let profile = profile_with_summary("Python engineer");
        for jd in [None, Some("")] {
            let result = score_resume(&profile, jd);
            assert_eq!(result.score, 0);
            assert_eq!(result.feedback, vec![NO_JOB_DESCRIPTION.to_string()]);
            assert!(result.matched_keywords.is_empty());
            assert!(result.missing_keywords.is_empty());
        }
    }

    #[test]
    fn test_whitespace_job_description_runs_pipeline() {
        let result = score_resume(&CandidateProfile::default(), Some("   "));
        assert_eq!(result.score, 0);
        assert!(result.matched_keywords.is_empty());
        assert!(result.missing_keywords.is_empty());
        assert!(result.feedback[0].starts_with("Low match."));
        assert!(!result.feedback.contains(&NO_JOB_DESCRIPTION.to_string()));
        assert!(result
            .feedback
            .iter()
            .any(|f| f.starts_with("Consider adding a professional summary")));
    }

    #[test]
    fn test_half_matched_scores_fifty() {
        let profile = profile_with_summary("Senior Python engineer");
        let result = score_resume(&profile, Some(SCENARIO_JD));

        assert_eq!(result.matched_keywords, vec!["python"]);
        assert_eq!(result.missing_keywords, vec!["cloud"]);
        assert_eq!(result.score, 50);
        assert!(result.feedback[0].starts_with("Moderate match."));
    }

    #[test]
    fn test_matched_and_missing_partition_the_keyword_set() {
        let jd = "Rust services and Rust tooling. Distributed systems, distributed systems, \
                  Kafka pipelines and Kafka pipelines for observability and observability.";
        let profile = CandidateProfile {
            summary: Some("Rust engineer who built Kafka pipelines".to_string()),
            ..Default::default()
        };

        let keywords = extract_keywords(jd);
        let result = score_resume(&profile, Some(jd));

        let mut combined: Vec<String> = result
            .matched_keywords
            .iter()
            .chain(result.missing_keywords.iter())
            .cloned()
            .collect();
        let mut expected: Vec<String> = keywords.terms().map(str::to_string).collect();
        assert_eq!(combined.len(), expected.len());
        combined.sort();
        expected.sort();
        assert_eq!(combined, expected);

        assert!(result.matched_keywords.iter().all(|m| !result.missing_keywords.contains(m)));
        assert_eq!(
            result.score,
            compute_score(result.matched_keywords.len(), keywords.len())
        );
    }

    #[test]
    fn test_no_keywords_scores_zero() {
        let result = score_resume(&CandidateProfile::default(), Some("One two three four."));
        assert_eq!(result.score, 0);
        assert!(result.matched_keywords.is_empty());
        assert!(result.missing_keywords.is_empty());
        assert!(result.feedback[0].starts_with("Low match."));
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let profile = profile_with_summary("Python and cloud engineer");
        let first = score_resume(&profile, Some(SCENARIO_JD));
        let second = score_resume(&profile, Some(SCENARIO_JD));
        assert_eq!(first, second);
    }

    #[test]
    fn test_summary_prompts() {
        let absent = score_resume(&CandidateProfile::default(), Some(SCENARIO_JD));
        assert!(absent
            .feedback
            .iter()
            .any(|f| f.starts_with("Consider adding a professional summary")));

        let short = score_resume(
            &profile_with_summary("Python developer with cloud focus"),
            Some(SCENARIO_JD),
        );
        assert!(short
            .feedback
            .iter()
            .any(|f| f.starts_with("Your summary could be more detailed")));
        assert!(!short
            .feedback
            .iter()
            .any(|f| f.starts_with("Consider adding a professional summary")));
    }

    #[test]
    fn test_action_verb_prompt() {
        let action_prompt = |result: &ScoreResult| {
            result
                .feedback
                .iter()
                .any(|f| f.starts_with("Use more action verbs"))
        };

        let with_verb = score_resume(&experience_with("Developed the billing API"), Some(SCENARIO_JD));
        assert!(!action_prompt(&with_verb));

        let without_verb = score_resume(&experience_with("Wrote some code"), Some(SCENARIO_JD));
        assert!(action_prompt(&without_verb));
    }

    #[test]
    fn test_missing_keywords_feedback_truncates_to_ten() {
        let words = [
            "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel", "india",
            "juliet", "kilo", "lima",
        ];
        let jd = format!("{}. {}.", words.join(". "), words.join(". "));

        let result = score_resume(&CandidateProfile::default(), Some(&jd));
        assert_eq!(result.missing_keywords.len(), 12);

        let line = result
            .feedback
            .iter()
            .find(|f| f.starts_with("Consider adding these missing keywords:"))
            .unwrap();
        assert!(line.ends_with("juliet..."));
        assert!(!line.contains("kilo"));
    }

    #[test]
    fn test_feedback_closes_with_format_tips() {
        let profile = CandidateProfile {
            skills: Some(SkillSections::new(vec![(
                "languages".to_string(),
                vec!["Python".to_string()],
            )])),
            ..Default::default()
        };
        let result = score_resume(&profile, Some(SCENARIO_JD));
        let n = result.feedback.len();
        assert!(result.feedback[n - 2].starts_with("Keep your resume format simple"));
        assert!(result.feedback[n - 1].starts_with("Use standard section headings"));
    }

    #[test]
    fn test_compute_score_rounding_and_bounds() {
        assert_eq!(compute_score(0, 0), 0);
        assert_eq!(compute_score(0, 7), 0);
        assert_eq!(compute_score(7, 7), 100);
        assert_eq!(compute_score(1, 3), 33);
        assert_eq!(compute_score(2, 3), 67);
    }

    #[test]
    fn test_keyword_backend_label() {
        assert_eq!(KeywordAtsScorer.backend(), "keyword");
    }
}
