use reqwest::Client;

use warta_core::{Error, NewsItem, Result};

pub(crate) const ENTRIES_PER_FEED: usize = 10;
pub(crate) const SUMMARY_MAX_CHARS: usize = 300;

const USER_AGENT: &str = "warta/0.1";

/// Fetch one feed over HTTP and map its entries to news items.
pub async fn fetch_feed(client: &Client, url: &str) -> Result<Vec<NewsItem>> {
    let response = client
        .get(url)
        .header("User-Agent", USER_AGENT)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(Error::Feed(format!(
            "{} returned {}",
            url,
            response.status()
        )));
    }

    let content = response.bytes().await?;
    parse_feed(&content, url)
}

/// Parse a syndication document, trying RSS first and falling back to Atom.
pub fn parse_feed(content: &[u8], url: &str) -> Result<Vec<NewsItem>> {
    if let Ok(channel) = rss::Channel::read_from(content) {
        return Ok(map_rss_channel(&channel));
    }

    if let Ok(feed) = atom_syndication::Feed::read_from(content) {
        return Ok(map_atom_feed(&feed));
    }

    Err(Error::Feed(format!("{} is neither RSS nor Atom", url)))
}

fn map_rss_channel(channel: &rss::Channel) -> Vec<NewsItem> {
    let source = if channel.title().is_empty() {
        "Unknown".to_string()
    } else {
        channel.title().to_string()
    };

    channel
        .items()
        .iter()
        .take(ENTRIES_PER_FEED)
        .map(|item| NewsItem {
            title: item.title().unwrap_or("No title").to_string(),
            url: item.link().unwrap_or_default().to_string(),
            source: source.clone(),
            published: item.pub_date().unwrap_or_default().to_string(),
            summary: clip(item.description().unwrap_or_default(), SUMMARY_MAX_CHARS),
            credibility_score: None,
        })
        .collect()
}

fn map_atom_feed(feed: &atom_syndication::Feed) -> Vec<NewsItem> {
    let source = if feed.title().as_str().is_empty() {
        "Unknown".to_string()
    } else {
        feed.title().to_string()
    };

    feed.entries()
        .iter()
        .take(ENTRIES_PER_FEED)
        .map(|entry| {
            let title = if entry.title().as_str().is_empty() {
                "No title".to_string()
            } else {
                entry.title().to_string()
            };

            NewsItem {
                title,
                url: entry
                    .links()
                    .first()
                    .map(|l| l.href().to_string())
                    .unwrap_or_default(),
                source: source.clone(),
                published: entry
                    .published()
                    .map(|d| d.to_rfc3339())
                    .unwrap_or_default(),
                summary: clip(
                    entry.summary().map(|s| s.as_str()).unwrap_or_default(),
                    SUMMARY_MAX_CHARS,
                ),
                credibility_score: None,
            }
        })
        .collect()
}

/// Prefix of at most `max_chars` characters, never splitting a
/// multi-byte character.
pub(crate) fn clip(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
