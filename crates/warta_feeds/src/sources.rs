use warta_core::Category;

/// A syndication feed the collector polls.
#[derive(Debug, Clone)]
pub struct FeedSource {
    pub name: String,
    pub url: String,
    pub category: Category,
}

impl FeedSource {
    pub fn new(name: &str, url: &str, category: Category) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            category,
        }
    }
}

/// Built-in feed list: Indonesian outlets on the national side,
/// international wire services on the other.
pub fn default_feeds() -> Vec<FeedSource> {
    vec![
        FeedSource::new("Kompas", "https://www.kompas.com/rss", Category::National),
        FeedSource::new(
            "Tempo",
            "https://www.tempo.co/rss/terbaru",
            Category::National,
        ),
        FeedSource::new(
            "BBC News",
            "http://feeds.bbci.co.uk/news/rss.xml",
            Category::International,
        ),
        FeedSource::new(
            "Reuters",
            "https://feeds.reuters.com/reuters/topNews",
            Category::International,
        ),
    ]
}
