use async_trait::async_trait;

use super::rates_model::{GoldRateRecord, NewGoldRate};
use crate::rates::Result;

/// Trait defining the contract for rate register operations.
#[async_trait]
pub trait RateServiceTrait: Send + Sync {
    async fn set_rate(&self, new_rate: NewGoldRate) -> Result<GoldRateRecord>;
    async fn ensure_default_rate(&self, price_per_gram: f64) -> Result<()>;
    fn current_rate(&self) -> Result<f64>;
    fn history(&self) -> Result<Vec<GoldRateRecord>>;
}
