use chrono::{Duration, Local};
use reqwest::Client;
use serde::Deserialize;

use warta_core::{Error, NewsItem, Result};

use crate::feed::{clip, SUMMARY_MAX_CHARS};

const SEARCH_URL: &str = "https://newsapi.org/v2/everything";
const QUERY: &str = "politics OR economy OR technology";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    articles: Vec<SearchArticle>,
}

#[derive(Debug, Deserialize)]
struct SearchArticle {
    title: Option<String>,
    url: Option<String>,
    source: Option<SearchSource>,
    #[serde(rename = "publishedAt")]
    published_at: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchSource {
    name: Option<String>,
}

/// Client for the NewsAPI "everything" search endpoint.
pub struct NewsApiClient {
    client: Client,
    api_key: String,
}

impl NewsApiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }

    /// Search yesterday's popular English-language headlines.
    pub async fn search(&self) -> Result<Vec<NewsItem>> {
        let from = (Local::now() - Duration::days(1))
            .format("%Y-%m-%d")
            .to_string();

        let response = self
            .client
            .get(SEARCH_URL)
            .query(&[
                ("apiKey", self.api_key.as_str()),
                ("q", QUERY),
                ("language", "en"),
                ("from", from.as_str()),
                ("sortBy", "popularity"),
                ("pageSize", "10"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Feed(format!(
                "NewsAPI returned {}",
                response.status()
            )));
        }

        let data: SearchResponse = response.json().await?;
        Ok(data.articles.into_iter().map(article_to_item).collect())
    }
}

fn article_to_item(article: SearchArticle) -> NewsItem {
    NewsItem {
        title: article.title.unwrap_or_default(),
        url: article.url.unwrap_or_default(),
        source: article
            .source
            .and_then(|s| s.name)
            .unwrap_or_else(|| "NewsAPI".to_string()),
        published: article.published_at.unwrap_or_default(),
        summary: clip(&article.description.unwrap_or_default(), SUMMARY_MAX_CHARS),
        credibility_score: None,
    }
}
