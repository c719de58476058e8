// Job-market data: dataset merge + sector tagging, and lookups over the merged table.
// The table is built once at startup; handlers only read it.

pub mod handlers;
pub mod lookup;
pub mod merge;
pub mod sector;

use anyhow::Result;
use tracing::{info, warn};

use crate::config::Config;

pub use lookup::JobMarket;

/// Loads the job-market table according to config.
///
/// Prefers an existing merged CSV; otherwise merges the two source datasets and,
/// if a merged path is configured, writes the result there. Returns `None` when
/// no data source is configured.
pub fn load_market(config: &Config) -> Result<Option<JobMarket>> {
    if let Some(path) = config.market_data_path.as_deref().filter(|p| p.exists()) {
        let postings = merge::read_postings(path)?;
        info!(
            "Loaded {} job postings from {}",
            postings.len(),
            path.display()
        );
        return Ok(Some(JobMarket::new(postings)));
    }

    let (Some(skills_path), Some(linkedin_path)) = (
        config.skills_dataset_path.as_deref(),
        config.linkedin_dataset_path.as_deref(),
    ) else {
        warn!("No job-market dataset configured; market endpoints are disabled");
        return Ok(None);
    };

    let postings = merge::merge_datasets(skills_path, linkedin_path)?;
    if let Some(out) = config.market_data_path.as_deref() {
        merge::write_postings(out, &postings)?;
        info!("Saved merged job-market table to {}", out.display());
    }

    Ok(Some(JobMarket::new(postings)))
}
