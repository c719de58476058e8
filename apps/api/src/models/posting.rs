use serde::{Deserialize, Serialize};

/// One row of the merged job-market table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub job_title: String,
    #[serde(default)]
    pub skills: String,
    #[serde(rename = "Sector")]
    pub sector: String,
}

/// Row of the skills dataset (`Job Title`, `Skills`).
#[derive(Debug, Clone, Deserialize)]
pub struct SkillsDatasetRow {
    #[serde(rename = "Job Title")]
    pub job_title: Option<String>,
    #[serde(rename = "Skills")]
    pub skills: Option<String>,
}

/// Row of the LinkedIn dataset (`job_title`, `job_skills`).
#[derive(Debug, Clone, Deserialize)]
pub struct LinkedinDatasetRow {
    pub job_title: Option<String>,
    pub job_skills: Option<String>,
}

/// A (name, count) pair in a ranked demand list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandCount {
    pub name: String,
    pub count: usize,
}
