use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, warn};

use warta_core::{DigestStore, Error, LinkNotifier, NewsBucket, Result};
use warta_feeds::{Collector, Verifier};
use warta_inference::Analyst;

/// The five stages, run strictly in order. Each stage consumes the
/// previous one's in-memory output; nothing is persisted between runs.
pub struct Pipeline {
    collector: Collector,
    verifier: Verifier,
    analyst: Analyst,
    store: Arc<dyn DigestStore>,
    notifier: Arc<dyn LinkNotifier>,
}

impl Pipeline {
    pub fn new(
        collector: Collector,
        verifier: Verifier,
        analyst: Analyst,
        store: Arc<dyn DigestStore>,
        notifier: Arc<dyn LinkNotifier>,
    ) -> Self {
        Self {
            collector,
            verifier,
            analyst,
            store,
            notifier,
        }
    }

    /// Run every stage for `date` and return the published document URL.
    pub async fn run(&self, date: NaiveDate) -> Result<String> {
        info!("[1/5] 📥 Collecting news...");
        let collected = self.collector.collect().await;
        if collected.is_empty() {
            return Err(Error::NothingCollected);
        }

        self.digest_and_publish(collected, date).await
    }

    async fn digest_and_publish(&self, collected: NewsBucket, date: NaiveDate) -> Result<String> {
        info!("[2/5] 🔍 Verifying news...");
        let verified = self.verifier.verify(collected);
        if verified.is_empty() {
            return Err(Error::NothingVerified);
        }

        info!("[3/5] 🧠 Analyzing news...");
        let digest = self.analyst.analyze(&verified, date).await;

        info!("[4/5] 📄 Publishing digest...");
        let doc_url = self.store.create_and_save(&digest, date).await?;

        info!("[5/5] 📤 Announcing the digest...");
        if !self.notifier.send_link(&doc_url, date).await {
            warn!("⚠️ Announcement failed, the digest is still published");
        }

        Ok(doc_url)
    }
}
