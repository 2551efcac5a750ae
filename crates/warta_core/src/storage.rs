use async_trait::async_trait;
use chrono::NaiveDate;

use crate::Result;

#[async_trait]
pub trait DigestStore: Send + Sync {
    /// Persist the digest for `date` somewhere durable and return a
    /// URL a reader can open.
    async fn create_and_save(&self, content: &str, date: NaiveDate) -> Result<String>;
}
