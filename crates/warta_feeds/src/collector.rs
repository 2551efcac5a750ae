use std::time::Duration;

use reqwest::Client;
use tracing::{info, warn};

use warta_core::{Category, NewsBucket, NewsItem};

use crate::feed::fetch_feed;
use crate::newsapi::NewsApiClient;
use crate::sources::{default_feeds, FeedSource};

pub const NATIONAL_LIMIT: usize = 10;
pub const INTERNATIONAL_LIMIT: usize = 20;

const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Gathers news from the configured feeds plus, when a key is
/// available, the NewsAPI search endpoint.
pub struct Collector {
    client: Client,
    feeds: Vec<FeedSource>,
    newsapi: Option<NewsApiClient>,
}

impl Collector {
    /// Build a collector over the default feed list, enabling NewsAPI
    /// when `NEWSAPI_KEY` is set.
    pub fn from_env() -> Self {
        let newsapi = std::env::var("NEWSAPI_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .map(NewsApiClient::new);

        if newsapi.is_none() {
            info!("NEWSAPI_KEY not set, skipping the search source");
        }

        Self::new(default_feeds(), newsapi)
    }

    pub fn new(feeds: Vec<FeedSource>, newsapi: Option<NewsApiClient>) -> Self {
        Self {
            client: Client::builder()
                .timeout(FETCH_TIMEOUT)
                .build()
                .unwrap_or_else(|_| Client::new()),
            feeds,
            newsapi,
        }
    }

    /// Poll every source in order. A failing source is logged and
    /// skipped; the result may be empty but this never fails.
    pub async fn collect(&self) -> NewsBucket {
        let mut bucket = NewsBucket::default();

        for feed in &self.feeds {
            match fetch_feed(&self.client, &feed.url).await {
                Ok(items) => {
                    info!("✓ {} entries from {}", items.len(), feed.name);
                    match feed.category {
                        Category::National => bucket.national.extend(items),
                        Category::International => bucket.international.extend(items),
                    }
                }
                Err(e) => warn!("✗ Failed to fetch feed {}: {}", feed.url, e),
            }
        }

        if let Some(newsapi) = &self.newsapi {
            match newsapi.search().await {
                Ok(items) => {
                    info!("✓ {} articles from NewsAPI", items.len());
                    bucket.international.extend(items);
                }
                Err(e) => warn!("✗ Failed to query NewsAPI: {}", e),
            }
        }

        sort_and_cap(&mut bucket.national, NATIONAL_LIMIT);
        sort_and_cap(&mut bucket.international, INTERNATIONAL_LIMIT);

        info!(
            "✅ Collected {} national, {} international",
            bucket.national.len(),
            bucket.international.len()
        );

        bucket
    }
}

/// Order newest first by the raw `published` string, then cap at
/// `limit`. The strings are compared as-is, whatever format their
/// source used.
pub(crate) fn sort_and_cap(items: &mut Vec<NewsItem>, limit: usize) {
    items.sort_by(|a, b| b.published.cmp(&a.published));
    items.truncate(limit);
}
