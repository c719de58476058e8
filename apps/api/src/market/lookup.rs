//! Lookups over the merged job-market table.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use crate::models::posting::{DemandCount, JobPosting};

/// Most in-demand titles and skills within a sector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SectorDemand {
    pub top_jobs: Vec<DemandCount>,
    pub top_skills: Vec<DemandCount>,
}

/// In-memory job-market table, loaded once at startup and shared read-only.
#[derive(Debug, Clone, Default)]
pub struct JobMarket {
    postings: Vec<JobPosting>,
}

impl JobMarket {
    pub fn new(postings: Vec<JobPosting>) -> Self {
        Self { postings }
    }

    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Distinct sectors, sorted.
    pub fn sectors(&self) -> Vec<String> {
        self.postings
            .iter()
            .map(|p| p.sector.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Job titles whose skills mention any of the comma-separated `skills_input`.
    /// Matching is case-insensitive substring containment. Result is sorted and distinct.
    pub fn jobs_by_skill(&self, skills_input: &str) -> Vec<String> {
        let search_skills = parse_skill_list(skills_input);

        let mut matching = BTreeSet::new();
        for skill in &search_skills {
            for posting in &self.postings {
                if posting.skills.to_lowercase().contains(skill.as_str()) {
                    matching.insert(posting.job_title.clone());
                }
            }
        }
        matching.into_iter().collect()
    }

    /// Top `top_n` titles and skills among postings in `sector` (case-insensitive).
    pub fn demand_by_sector(&self, sector: &str, top_n: usize) -> SectorDemand {
        let sector = sector.to_lowercase();
        let in_sector: Vec<&JobPosting> = self
            .postings
            .iter()
            .filter(|p| p.sector.to_lowercase() == sector)
            .collect();

        if in_sector.is_empty() {
            return SectorDemand::default();
        }

        let top_jobs = top_counts(in_sector.iter().map(|p| p.job_title.clone()), top_n);
        let top_skills = top_counts(
            in_sector.iter().flat_map(|p| {
                p.skills
                    .split(',')
                    .map(|s| s.trim().to_lowercase())
                    .filter(|s| !s.is_empty())
            }),
            top_n,
        );

        SectorDemand {
            top_jobs,
            top_skills,
        }
    }
}

/// Splits a comma-separated skill query into trimmed, lowercased skills.
/// Empty entries (`"python,"`) are dropped so they cannot match every posting.
pub fn parse_skill_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Counts items and returns the `top_n` most common. Ties keep first-seen order.
fn top_counts(items: impl Iterator<Item = String>, top_n: usize) -> Vec<DemandCount> {
    let mut counts: Vec<DemandCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for item in items {
        match index.get(&item) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(item.clone(), counts.len());
                counts.push(DemandCount {
                    name: item,
                    count: 1,
                });
            }
        }
    }

    // stable sort keeps first-seen order among equal counts
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(top_n);
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posting(title: &str, skills: &str, sector: &str) -> JobPosting {
        JobPosting {
            job_title: title.to_string(),
            skills: skills.to_string(),
            sector: sector.to_string(),
        }
    }

    fn market() -> JobMarket {
        JobMarket::new(vec![
            posting("backend engineer", "Rust, SQL, Docker", "Technology"),
            posting("data engineer", "Python, SQL, Spark", "Technology"),
            posting("registered nurse", "Patient care, BLS", "Healthcare"),
            posting("ml engineer", "python, PyTorch", "Technology"),
            posting("bank teller", "Cash handling", "Finance"),
        ])
    }

    #[test]
    fn test_sectors_sorted_distinct() {
        assert_eq!(
            market().sectors(),
            vec!["Finance", "Healthcare", "Technology"]
        );
    }

    #[test]
    fn test_jobs_by_skill_any_match_sorted() {
        let jobs = market().jobs_by_skill(" Python , bls");
        assert_eq!(
            jobs,
            vec!["data engineer", "ml engineer", "registered nurse"]
        );
    }

    #[test]
    fn test_jobs_by_skill_substring_match() {
        // "sq" is contained in "sql"
        let jobs = market().jobs_by_skill("sq");
        assert_eq!(jobs, vec!["backend engineer", "data engineer"]);
    }

    #[test]
    fn test_jobs_by_skill_no_match() {
        assert!(market().jobs_by_skill("cobol").is_empty());
    }

    #[test]
    fn test_demand_by_sector_counts_skills() {
        let demand = market().demand_by_sector("technology", 2);
        assert_eq!(demand.top_jobs.len(), 2);
        assert_eq!(demand.top_jobs[0].name, "backend engineer");
        assert_eq!(demand.top_jobs[0].count, 1);

        assert_eq!(
            demand.top_skills,
            vec![
                DemandCount {
                    name: "sql".to_string(),
                    count: 2
                },
                DemandCount {
                    name: "python".to_string(),
                    count: 2
                },
            ]
        );
    }

    #[test]
    fn test_demand_by_unknown_sector_is_empty() {
        assert_eq!(
            market().demand_by_sector("Aerospace", 10),
            SectorDemand::default()
        );
    }

    #[test]
    fn test_parse_skill_list() {
        assert_eq!(parse_skill_list("Rust, GO ,sql"), vec!["rust", "go", "sql"]);
        assert_eq!(parse_skill_list("python, ,"), vec!["python"]);
        assert!(parse_skill_list(" , ").is_empty());
    }

    #[test]
    fn test_trailing_comma_does_not_match_everything() {
        let mut market = market();
        market.postings.push(posting("volunteer", "", "Non-profit/Volunteer"));

        let jobs = market.jobs_by_skill("bls,");
        assert_eq!(jobs, vec!["registered nurse"]);
    }
}
