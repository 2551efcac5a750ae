pub mod error;
pub mod models;
pub mod notify;
pub mod storage;
pub mod types;

pub use error::{Error, Result};
pub use models::CompletionModel;
pub use notify::LinkNotifier;
pub use storage::DigestStore;
pub use types::{Category, NewsBucket, NewsItem};
