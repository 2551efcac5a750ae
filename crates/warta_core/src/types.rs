use serde::{Deserialize, Serialize};

/// Which side of the digest an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    National,
    International,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub url: String,
    pub source: String,
    /// Publication timestamp exactly as the upstream source emitted it.
    /// Empty when the source did not provide one.
    pub published: String,
    pub summary: String,
    pub credibility_score: Option<f64>,
}

/// Collected news, split by category. Order within each list is
/// newest-first as established by the collector.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewsBucket {
    pub national: Vec<NewsItem>,
    pub international: Vec<NewsItem>,
}

impl NewsBucket {
    pub fn is_empty(&self) -> bool {
        self.national.is_empty() && self.international.is_empty()
    }

    pub fn total(&self) -> usize {
        self.national.len() + self.international.len()
    }
}
