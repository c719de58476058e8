//! Feedback lines attached to an ATS score.

use crate::models::profile::CandidateProfile;
use crate::scoring::ats::KeywordMatches;

pub const NO_JOB_DESCRIPTION: &str = "No job description provided for ATS scoring.";

const ADD_SUMMARY: &str =
    "Consider adding a professional summary that highlights your most relevant qualifications.";
const EXPAND_SUMMARY: &str =
    "Your summary could be more detailed. Aim for 3-4 sentences highlighting key qualifications.";
const ADD_SKILLS: &str =
    "Add a skills section with relevant hard and soft skills from the job description.";
const MORE_SKILLS: &str =
    "Your skills section could better match the job requirements. Add more relevant skills.";
const ADD_EXPERIENCE: &str =
    "No work experience listed. Include relevant experience, even if from internships or projects.";
const USE_ACTION_VERBS: &str =
    "Use more action verbs in your experience descriptions (e.g., 'managed', 'developed', 'implemented').";
const FORMAT_TIPS: [&str; 2] = [
    "Keep your resume format simple and clean for best ATS compatibility.",
    "Use standard section headings like 'Professional Experience' and 'Education'.",
];

const ACTION_VERBS: &[&str] = &[
    "managed",
    "led",
    "developed",
    "created",
    "implemented",
    "improved",
    "increased",
    "reduced",
    "optimized",
    "designed",
];

/// Summaries shorter than this many words get an "expand it" prompt.
const MIN_SUMMARY_WORDS: usize = 20;
/// Missing keywords listed verbatim before the list is elided.
const MISSING_KEYWORDS_SHOWN: usize = 10;

/// Builds feedback in fixed order: score band, summary, skills, experience,
/// missing keywords, then the two format tips.
pub fn build_feedback(
    profile: &CandidateProfile,
    resume_text: &str,
    matches: &KeywordMatches,
    score: u32,
) -> Vec<String> {
    let mut feedback = vec![score_band_message(score).to_string()];

    if !profile.has_summary() {
        feedback.push(ADD_SUMMARY.to_string());
    } else if profile.summary_word_count() < MIN_SUMMARY_WORDS {
        feedback.push(EXPAND_SUMMARY.to_string());
    }

    if !profile.has_skills() {
        feedback.push(ADD_SKILLS.to_string());
    } else if (matches.matched.len() as f64) < matches.total() as f64 * 0.5 {
        feedback.push(MORE_SKILLS.to_string());
    }

    if !profile.has_experience() {
        feedback.push(ADD_EXPERIENCE.to_string());
    } else if !ACTION_VERBS.iter().any(|verb| resume_text.contains(verb)) {
        feedback.push(USE_ACTION_VERBS.to_string());
    }

    if let Some(line) = missing_keywords_line(&matches.missing) {
        feedback.push(line);
    }

    feedback.extend(FORMAT_TIPS.iter().map(|tip| tip.to_string()));
    feedback
}

fn score_band_message(score: u32) -> &'static str {
    match score {
        s if s >= 80 => "Excellent! Your resume has strong alignment with the job description.",
        s if s >= 60 => "Good match. Your resume aligns well but could be improved further.",
        s if s >= 40 => "Moderate match. Your resume needs more optimization for this role.",
        _ => "Low match. Significant improvements needed to better align with this role.",
    }
}

fn missing_keywords_line(missing: &[String]) -> Option<String> {
    if missing.is_empty() {
        return None;
    }
    let shown: Vec<&str> = missing
        .iter()
        .take(MISSING_KEYWORDS_SHOWN)
        .map(String::as_str)
        .collect();
    let ellipsis = if missing.len() > MISSING_KEYWORDS_SHOWN {
        "..."
    } else {
        ""
    };
    Some(format!(
        "Consider adding these missing keywords: {}{ellipsis}",
        shown.join(", ")
    ))
}
