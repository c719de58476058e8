//! Flattens a candidate profile into one lowercase blob for substring matching.

use crate::models::profile::CandidateProfile;

/// Builds the searchable resume text: summary, skills, experience, education, projects,
/// in profile order. Each non-empty field is appended as `" " + lowercase(field)`.
pub fn flatten_profile(profile: &CandidateProfile) -> String {
    let mut text = ResumeText::default();

    text.push(profile.summary.as_deref());

    if let Some(skills) = &profile.skills {
        for (_, category_skills) in skills.iter() {
            text.push(Some(category_skills.join(" ").as_str()));
        }
    }

    for exp in profile.experience.iter().flatten() {
        text.push(exp.title.as_deref());
        text.push(exp.company.as_deref());
        text.push(exp.description.as_deref());
        for resp in &exp.responsibilities {
            text.push(resp.text());
        }
    }

    for edu in profile.education.iter().flatten() {
        text.push(edu.degree.as_deref());
        text.push(edu.university.as_deref());
        text.push(edu.description.as_deref());
    }

    for proj in profile.projects.iter().flatten() {
        text.push(proj.name.as_deref());
        text.push(proj.description.as_deref());
        text.push(Some(proj.technologies.join(" ").as_str()));
    }

    text.0
}

#[derive(Default)]
struct ResumeText(String);

impl ResumeText {
    fn push(&mut self, field: Option<&str>) {
        if let Some(field) = field.filter(|f| !f.is_empty()) {
            self.0.push(' ');
            self.0.push_str(&field.to_lowercase());
        }
    }
}
