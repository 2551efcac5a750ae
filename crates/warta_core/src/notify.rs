use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait LinkNotifier: Send + Sync {
    /// Announce the published digest URL. Returns false when delivery
    /// failed; the caller decides whether that matters.
    async fn send_link(&self, doc_url: &str, date: NaiveDate) -> bool;
}
