// ATS scoring: keyword extraction, resume flattening, match scoring, feedback.
// Pure and synchronous; handlers call straight into it.

pub mod ats;
pub mod feedback;
pub mod handlers;
pub mod keywords;
pub mod resume_text;
