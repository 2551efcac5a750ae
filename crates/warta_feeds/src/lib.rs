pub mod collector;
pub mod feed;
pub mod newsapi;
pub mod sources;
pub mod verify;

pub use collector::{Collector, INTERNATIONAL_LIMIT, NATIONAL_LIMIT};
pub use newsapi::NewsApiClient;
pub use sources::{default_feeds, FeedSource};
pub use verify::Verifier;
