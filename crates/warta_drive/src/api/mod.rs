use async_trait::async_trait;
use reqwest::Response;

use warta_core::{Error, Result};

pub mod docs;
pub mod drive;

pub use docs::GoogleDocs;
pub use drive::GoogleDrive;

pub const FOLDER_MIME: &str = "application/vnd.google-apps.folder";
pub const DOCUMENT_MIME: &str = "application/vnd.google-apps.document";

/// File and folder operations against the storage service.
#[async_trait]
pub trait DriveApi: Send + Sync {
    /// Id of the folder with this exact name directly under
    /// `parent_id`, if one exists.
    async fn find_folder(&self, name: &str, parent_id: &str) -> Result<Option<String>>;

    async fn create_folder(&self, name: &str, parent_id: &str) -> Result<String>;

    /// Create a structured document directly under `parent_id`.
    async fn create_document(&self, title: &str, parent_id: &str) -> Result<String>;

    /// Re-parent an existing file into `folder_id`.
    async fn move_file(&self, file_id: &str, folder_id: &str) -> Result<()>;

    /// Create a plain-text file under `parent_id` holding `content`.
    async fn upload_text_file(&self, name: &str, parent_id: &str, content: &str)
        -> Result<String>;
}

/// Document-body operations against the docs service.
#[async_trait]
pub trait DocsApi: Send + Sync {
    /// Create an unparented document, returning its id.
    async fn create_document(&self, title: &str) -> Result<String>;

    /// Insert `text` at the start of the document body.
    async fn insert_text(&self, document_id: &str, text: &str) -> Result<()>;
}

/// Map a non-success response to a publish error carrying the body.
pub(crate) async fn checked(response: Response, what: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(Error::Publish(format!("{what} failed ({status}): {body}")))
}
