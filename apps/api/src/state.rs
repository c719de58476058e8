use std::sync::Arc;

use crate::config::Config;
use crate::market::JobMarket;
use crate::scoring::ats::AtsScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable ATS scorer. Default: KeywordAtsScorer.
    pub scorer: Arc<dyn AtsScorer>,
    /// Merged job-market table; `None` when no dataset is configured.
    pub market: Option<Arc<JobMarket>>,
}

impl AppState {
    pub fn market(&self) -> Result<&JobMarket, crate::errors::AppError> {
        self.market
            .as_deref()
            .ok_or(crate::errors::AppError::MarketDataUnavailable)
    }
}
