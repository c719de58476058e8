//! Dataset merge: combines the skills and LinkedIn job datasets into one
//! deduplicated, sector-tagged table and reads/writes it as CSV.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::market::sector::infer_sector;
use crate::models::posting::{JobPosting, LinkedinDatasetRow, SkillsDatasetRow};

/// Merges the two sources: skills dataset rows first, then LinkedIn rows.
///
/// Titles are lowercased and deduplicated (first occurrence wins); rows without a
/// title are dropped. Every surviving row is tagged with an inferred sector.
pub fn merge_postings(
    skills_rows: impl IntoIterator<Item = SkillsDatasetRow>,
    linkedin_rows: impl IntoIterator<Item = LinkedinDatasetRow>,
) -> Vec<JobPosting> {
    let candidates = skills_rows
        .into_iter()
        .map(|row| (row.job_title, row.skills))
        .chain(
            linkedin_rows
                .into_iter()
                .map(|row| (row.job_title, row.job_skills)),
        );

    let mut seen = HashSet::new();
    let mut postings = Vec::new();

    for (title, skills) in candidates {
        let Some(title) = title.map(|t| t.to_lowercase()) else {
            continue;
        };
        if !seen.insert(title.clone()) {
            continue;
        }
        let sector = infer_sector(&title).to_string();
        postings.push(JobPosting {
            skills: clean_skills(skills.as_deref().unwrap_or("")),
            job_title: title,
            sector,
        });
    }

    postings
}

/// Trims leading/trailing commas and spaces and collapses empty list slots.
pub fn clean_skills(skills: &str) -> String {
    skills
        .trim_matches(|c| c == ',' || c == ' ')
        .replace(", , ", ", ")
}

/// Reads both source CSVs and merges them.
pub fn merge_datasets(skills_path: &Path, linkedin_path: &Path) -> Result<Vec<JobPosting>> {
    let skills_rows: Vec<SkillsDatasetRow> = read_rows(skills_path)?;
    let linkedin_rows: Vec<LinkedinDatasetRow> = read_rows(linkedin_path)?;
    let total = skills_rows.len() + linkedin_rows.len();

    let postings = merge_postings(skills_rows, linkedin_rows);
    info!(
        "Merged {total} dataset rows into {} unique job titles",
        postings.len()
    );
    Ok(postings)
}

/// Loads a previously merged table.
pub fn read_postings(path: &Path) -> Result<Vec<JobPosting>> {
    read_rows(path)
}

/// Writes the merged table with header `job_title,skills,Sector`.
pub fn write_postings(path: &Path, postings: &[JobPosting]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    for posting in postings {
        writer.serialize(posting)?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

fn read_rows<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open CSV dataset {}", path.display()))?;
    reader
        .deserialize()
        .collect::<Result<Vec<T>, csv::Error>>()
        .with_context(|| format!("Failed to parse CSV dataset {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn skills_row(title: &str, skills: Option<&str>) -> SkillsDatasetRow {
        SkillsDatasetRow {
            job_title: Some(title.to_string()),
            skills: skills.map(str::to_string),
        }
    }

    fn linkedin_row(title: Option<&str>, skills: &str) -> LinkedinDatasetRow {
        LinkedinDatasetRow {
            job_title: title.map(str::to_string),
            job_skills: Some(skills.to_string()),
        }
    }

    fn csv_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_merge_dedups_by_lowercased_title_keeping_first() {
        let postings = merge_postings(
            vec![skills_row("Data Engineer", Some("Python, SQL"))],
            vec![
                linkedin_row(Some("data engineer"), "Spark"),
                linkedin_row(Some("Bank Teller"), "Cash handling"),
            ],
        );

        assert_eq!(postings.len(), 2);
        assert_eq!(postings[0].job_title, "data engineer");
        assert_eq!(postings[0].skills, "Python, SQL");
        assert_eq!(postings[0].sector, "Technology");
        assert_eq!(postings[1].job_title, "bank teller");
        assert_eq!(postings[1].sector, "Finance");
    }

    #[test]
    fn test_rows_without_title_are_dropped() {
        let postings = merge_postings(vec![], vec![linkedin_row(None, "Excel")]);
        assert!(postings.is_empty());
    }

    #[test]
    fn test_missing_skills_become_empty() {
        let postings = merge_postings(vec![skills_row("Welder", None)], vec![]);
        assert_eq!(postings[0].skills, "");
    }

    #[test]
    fn test_clean_skills() {
        assert_eq!(clean_skills(", Python, SQL, "), "Python, SQL");
        assert_eq!(clean_skills("Python, , SQL"), "Python, SQL");
        assert_eq!(clean_skills(""), "");
    }

    #[test]
    fn test_merge_datasets_from_csv_and_round_trip() {
        let skills = csv_file("Job Title,Skills,Salary\nSoftware Engineer,\"Rust, Go\",100\n");
        let linkedin = csv_file(
            "job_link,job_title,job_skills\nhttp://x,Registered Nurse,\"Patient care, BLS\"\n\
             http://y,software engineer,Java\n",
        );

        let postings = merge_datasets(skills.path(), linkedin.path()).unwrap();
        assert_eq!(postings.len(), 2);
        assert_eq!(postings[1].job_title, "registered nurse");
        assert_eq!(postings[1].sector, "Healthcare");

        let out = NamedTempFile::new().unwrap();
        write_postings(out.path(), &postings).unwrap();

        let header = std::fs::read_to_string(out.path()).unwrap();
        assert!(header.starts_with("job_title,skills,Sector\n"));

        let reloaded = read_postings(out.path()).unwrap();
        assert_eq!(reloaded, postings);
    }

    #[test]
    fn test_read_missing_file_is_error() {
        let err = read_postings(Path::new("/nonexistent/merged.csv")).unwrap_err();
        assert!(err.to_string().contains("Failed to open CSV dataset"));
    }
}
