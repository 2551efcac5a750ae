pub mod api;
pub mod auth;
pub mod markdown;
pub mod publisher;

pub use api::{DocsApi, DriveApi, GoogleDocs, GoogleDrive};
pub use auth::{GoogleAuth, ServiceAccountKey};
pub use markdown::markdown_to_plain_text;
pub use publisher::DrivePublisher;
