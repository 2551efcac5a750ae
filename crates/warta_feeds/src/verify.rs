use chrono::{Local, NaiveDateTime};
use tracing::info;

use warta_core::{NewsBucket, NewsItem};

/// Sources whose reporting is accepted. Matching is by substring so
/// feed title variants ("Kompas.com - Berita Terkini") still hit.
pub const TRUSTED_SOURCES: &[&str] = &[
    "Kompas.com",
    "TEMPO.CO",
    "detikcom",
    "BBC News",
    "Reuters",
    "Associated Press",
    "The Guardian",
];

/// Score stamped on every item that passes verification.
pub const CREDIBILITY_SCORE: f64 = 8.5;

const MAX_AGE_DAYS: i64 = 2;

/// Timestamp layouts seen across the configured feeds, zone suffixes
/// already stripped.
const PUBLISHED_LAYOUTS: &[&str] = &[
    "%a, %d %b %Y %H:%M:%S",
    "%Y-%m-%dT%H:%M:%SZ",
    "%Y-%m-%dT%H:%M:%S",
];

#[derive(Debug, Default)]
pub struct Verifier;

impl Verifier {
    pub fn new() -> Self {
        Self
    }

    /// Keep only trusted, recent, complete items and stamp them with
    /// the credibility score. Order within each category is preserved.
    pub fn verify(&self, bucket: NewsBucket) -> NewsBucket {
        let verified = NewsBucket {
            national: self.filter(bucket.national),
            international: self.filter(bucket.international),
        };

        info!(
            "✅ After filtering: {} national, {} international",
            verified.national.len(),
            verified.international.len()
        );

        verified
    }

    fn filter(&self, items: Vec<NewsItem>) -> Vec<NewsItem> {
        items
            .into_iter()
            .filter(|item| {
                is_trusted(&item.source)
                    && is_recent(&item.published)
                    && !item.title.is_empty()
                    && !item.url.is_empty()
            })
            .map(|mut item| {
                item.credibility_score = Some(CREDIBILITY_SCORE);
                item
            })
            .collect()
    }
}

fn is_trusted(source: &str) -> bool {
    TRUSTED_SOURCES.iter().any(|trusted| source.contains(trusted))
}

/// Whether `published` falls within the freshness window. Empty values
/// are rejected outright; values no known layout can parse are kept.
fn is_recent(published: &str) -> bool {
    if published.is_empty() {
        return false;
    }

    // Zone offsets are not part of any layout; drop everything from the
    // first '+' before parsing.
    let cleaned = published.split('+').next().unwrap_or(published).trim();

    for layout in PUBLISHED_LAYOUTS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(cleaned, layout) {
            let age = Local::now().naive_local() - parsed;
            return age.num_days() <= MAX_AGE_DAYS;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn item(source: &str, published: &str) -> NewsItem {
        NewsItem {
            title: "Judul".to_string(),
            url: "https://example.com/x".to_string(),
            source: source.to_string(),
            published: published.to_string(),
            summary: String::new(),
            credibility_score: None,
        }
    }

    fn recent_timestamp() -> String {
        (Local::now().naive_local() - Duration::hours(3))
            .format("%Y-%m-%dT%H:%M:%SZ")
            .to_string()
    }

    fn stale_timestamp() -> String {
        (Local::now().naive_local() - Duration::days(5))
            .format("%Y-%m-%dT%H:%M:%SZ")
            .to_string()
    }

    #[test]
    fn untrusted_sources_are_dropped() {
        let bucket = NewsBucket {
            national: vec![item("Blog Pribadi", &recent_timestamp())],
            international: vec![item("BBC News", &recent_timestamp())],
        };

        let verified = Verifier::new().verify(bucket);

        assert!(verified.national.is_empty());
        assert_eq!(verified.international.len(), 1);
    }

    #[test]
    fn trusted_match_is_substring_based() {
        assert!(is_trusted("Kompas.com - Berita Terkini"));
        assert!(is_trusted("Reuters"));
        assert!(!is_trusted("Random Tabloid"));
    }

    #[test]
    fn stale_items_are_dropped() {
        let bucket = NewsBucket {
            national: vec![item("Kompas.com", &stale_timestamp())],
            international: Vec::new(),
        };

        let verified = Verifier::new().verify(bucket);
        assert!(verified.national.is_empty());
    }

    #[test]
    fn empty_published_is_rejected() {
        assert!(!is_recent(""));
    }

    #[test]
    fn unparseable_published_is_kept() {
        // Trailing zone names defeat every layout
        assert!(is_recent("Fri, 22 Aug 2025 10:00:00 GMT"));
        assert!(is_recent("sometime last week"));
    }

    #[test]
    fn offset_suffix_is_stripped_before_parsing() {
        let fresh = (Local::now().naive_local() - Duration::hours(2))
            .format("%Y-%m-%dT%H:%M:%S")
            .to_string();
        assert!(is_recent(&format!("{fresh}+07:00")));

        let old = (Local::now().naive_local() - Duration::days(10))
            .format("%Y-%m-%dT%H:%M:%S")
            .to_string();
        assert!(!is_recent(&format!("{old}+07:00")));
    }

    #[test]
    fn items_missing_title_or_url_are_dropped() {
        let mut untitled = item("BBC News", &recent_timestamp());
        untitled.title = String::new();

        let mut unlinked = item("BBC News", &recent_timestamp());
        unlinked.url = String::new();

        let bucket = NewsBucket {
            national: Vec::new(),
            international: vec![untitled, unlinked],
        };

        let verified = Verifier::new().verify(bucket);
        assert!(verified.international.is_empty());
    }

    #[test]
    fn survivors_get_the_credibility_score() {
        let bucket = NewsBucket {
            national: vec![item("TEMPO.CO", &recent_timestamp())],
            international: Vec::new(),
        };

        let verified = Verifier::new().verify(bucket);
        assert_eq!(verified.national[0].credibility_score, Some(CREDIBILITY_SCORE));
    }

    #[test]
    fn rfc2822_body_without_zone_parses() {
        // An RSS pubDate whose "+0700" suffix was stripped by the
        // cleaner still matches the first layout.
        let recent = Local::now().naive_local() - Duration::hours(6);
        let stamp = format!("{}+0700", recent.format("%a, %d %b %Y %H:%M:%S "));
        assert!(is_recent(&stamp));
    }
}
