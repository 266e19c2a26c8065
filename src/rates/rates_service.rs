use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use log::{debug, info};
use std::sync::Arc;

use super::rates_model::{GoldRateRecord, NewGoldRate};
use super::rates_repository::RateRepository;
use crate::constants::SEED_RATE_SET_BY;
use crate::rates::{RateServiceTrait, Result};

/// Service for the gold rate register. The current rate is derived from the
/// newest history entry so the register and its history can never disagree.
pub struct RateService {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl RateService {
    /// Creates a new RateService instance
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl RateServiceTrait for RateService {
    /// Appends a new rate entry and thereby establishes it as current.
    async fn set_rate(&self, new_rate: NewGoldRate) -> Result<GoldRateRecord> {
        debug!(
            "Setting gold rate..., price_per_gram: {}, set_by: {}",
            new_rate.price_per_gram, new_rate.set_by
        );
        let repo = RateRepository::new(self.pool.clone());
        repo.append(new_rate)
    }

    /// Seeds a default rate when the history is empty, so `current_rate`
    /// is answerable from the first deposit on. No-op otherwise.
    async fn ensure_default_rate(&self, price_per_gram: f64) -> Result<()> {
        let repo = RateRepository::new(self.pool.clone());
        if repo.count()? == 0 {
            info!("No gold rate history found, seeding default rate {}", price_per_gram);
            repo.append(NewGoldRate {
                price_per_gram,
                set_by: SEED_RATE_SET_BY.to_string(),
            })?;
        }
        Ok(())
    }

    /// Price per gram of the newest history entry.
    fn current_rate(&self) -> Result<f64> {
        let repo = RateRepository::new(self.pool.clone());
        Ok(repo.latest()?.price_per_gram)
    }

    /// Full rate history, newest first.
    fn history(&self) -> Result<Vec<GoldRateRecord>> {
        let repo = RateRepository::new(self.pool.clone());
        repo.history()
    }
}
