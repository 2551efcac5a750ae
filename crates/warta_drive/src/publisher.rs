use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use reqwest::Client;
use tracing::{info, warn};

use warta_core::{DigestStore, Error, Result};

use crate::api::{DocsApi, DriveApi, GoogleDocs, GoogleDrive};
use crate::auth::GoogleAuth;
use crate::markdown::markdown_to_plain_text;

/// Publishes the digest into a year/month folder tree on Drive,
/// falling back to simpler creation strategies when a step fails.
pub struct DrivePublisher {
    drive: Arc<dyn DriveApi>,
    docs: Arc<dyn DocsApi>,
    root_folder: String,
}

impl DrivePublisher {
    /// Build against the real Drive and Docs services. Requires
    /// `GOOGLE_CREDENTIALS_JSON` and `GOOGLE_DRIVE_FOLDER_ID`.
    pub fn from_env() -> Result<Self> {
        let root_folder = std::env::var("GOOGLE_DRIVE_FOLDER_ID")
            .ok()
            .filter(|value| !value.is_empty())
            .ok_or_else(|| Error::Config("GOOGLE_DRIVE_FOLDER_ID is not set".to_string()))?;

        let auth = Arc::new(GoogleAuth::from_env()?);
        let client = Client::new();

        info!("✅ Google Drive & Docs clients initialized");

        Ok(Self::new(
            Arc::new(GoogleDrive::new(client.clone(), auth.clone())),
            Arc::new(GoogleDocs::new(client, auth)),
            root_folder,
        ))
    }

    pub fn new(drive: Arc<dyn DriveApi>, docs: Arc<dyn DocsApi>, root_folder: String) -> Self {
        Self {
            drive,
            docs,
            root_folder,
        }
    }

    /// Find or create `name` under `parent_id`. Any failure degrades
    /// to the parent itself so publishing can continue.
    async fn folder_or_parent(&self, name: &str, parent_id: &str) -> String {
        match self.drive.find_folder(name, parent_id).await {
            Ok(Some(id)) => id,
            Ok(None) => match self.drive.create_folder(name, parent_id).await {
                Ok(id) => {
                    info!("📁 Folder '{}' created", name);
                    id
                }
                Err(e) => {
                    warn!("✗ Could not create folder '{}': {}", name, e);
                    parent_id.to_string()
                }
            },
            Err(e) => {
                warn!("✗ Folder lookup for '{}' failed: {}", name, e);
                parent_id.to_string()
            }
        }
    }

    async fn resolve_month_folder(&self, date: NaiveDate) -> String {
        let year = date.year().to_string();
        let month = date.format("%B").to_string();

        let year_folder = self.folder_or_parent(&year, &self.root_folder).await;
        self.folder_or_parent(&month, &year_folder).await
    }

    /// Parented create first; when that fails, create through the docs
    /// service and move the result into place.
    async fn create_document(&self, title: &str, folder_id: &str) -> Result<String> {
        match self.drive.create_document(title, folder_id).await {
            Ok(id) => Ok(id),
            Err(e) => {
                warn!("✗ Parented document create failed: {}", e);
                info!("🔄 Trying the docs service instead...");

                let id = self.docs.create_document(title).await?;
                if let Err(e) = self.drive.move_file(&id, folder_id).await {
                    // Not critical: the document exists, just not in
                    // the right folder.
                    warn!("✗ Could not move document into folder: {}", e);
                }
                Ok(id)
            }
        }
    }
}

#[async_trait]
impl DigestStore for DrivePublisher {
    async fn create_and_save(&self, content: &str, date: NaiveDate) -> Result<String> {
        info!("📝 Creating document for {}...", date.format("%Y-%m-%d"));

        let folder_id = self.resolve_month_folder(date).await;
        let title = format!("AI News Digest - {}", date.format("%Y-%m-%d"));
        let plain_text = markdown_to_plain_text(content);

        match self.create_document(&title, &folder_id).await {
            Ok(doc_id) => match self.docs.insert_text(&doc_id, &plain_text).await {
                Ok(()) => {
                    info!("✅ Document created: {}", title);
                    return Ok(format!("https://docs.google.com/document/d/{doc_id}/edit"));
                }
                Err(e) => warn!("✗ Could not insert content: {}", e),
            },
            Err(e) => warn!("✗ Document creation failed: {}", e),
        }

        info!("🆘 Falling back to a plain-text file...");
        let file_id = self
            .drive
            .upload_text_file(&format!("{title}.txt"), &folder_id, &plain_text)
            .await
            .map_err(|e| Error::Publish(format!("every creation strategy failed: {e}")))?;

        info!("✅ Plain-text fallback uploaded");
        Ok(format!("https://drive.google.com/file/d/{file_id}/view"))
    }
}
