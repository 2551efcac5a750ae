use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use warta_core::Result;

use crate::auth::GoogleAuth;

use super::{checked, DriveApi, DOCUMENT_MIME, FOLDER_MIME};

const API_BASE: &str = "https://www.googleapis.com/drive/v3";
const UPLOAD_BASE: &str = "https://www.googleapis.com/upload/drive/v3";

#[derive(Deserialize)]
struct FileList {
    #[serde(default)]
    files: Vec<FileRef>,
}

#[derive(Deserialize)]
struct FileRef {
    id: String,
}

#[derive(Deserialize)]
struct FileParents {
    #[serde(default)]
    parents: Vec<String>,
}

/// Drive v3 REST client.
pub struct GoogleDrive {
    client: Client,
    auth: Arc<GoogleAuth>,
}

impl GoogleDrive {
    pub fn new(client: Client, auth: Arc<GoogleAuth>) -> Self {
        Self { client, auth }
    }

    async fn create_file(&self, metadata: serde_json::Value, what: &str) -> Result<String> {
        let token = self.auth.access_token().await?;

        let response = self
            .client
            .post(format!("{API_BASE}/files"))
            .bearer_auth(&token)
            .query(&[("fields", "id")])
            .json(&metadata)
            .send()
            .await?;

        let created: FileRef = checked(response, what).await?.json().await?;
        Ok(created.id)
    }
}

#[async_trait]
impl DriveApi for GoogleDrive {
    async fn find_folder(&self, name: &str, parent_id: &str) -> Result<Option<String>> {
        let token = self.auth.access_token().await?;
        let query = format!(
            "name='{name}' and '{parent_id}' in parents and mimeType='{FOLDER_MIME}' and trashed=false"
        );

        let response = self
            .client
            .get(format!("{API_BASE}/files"))
            .bearer_auth(&token)
            .query(&[
                ("q", query.as_str()),
                ("spaces", "drive"),
                ("fields", "files(id, name)"),
            ])
            .send()
            .await?;

        let list: FileList = checked(response, "folder lookup").await?.json().await?;
        Ok(list.files.into_iter().next().map(|file| file.id))
    }

    async fn create_folder(&self, name: &str, parent_id: &str) -> Result<String> {
        let metadata = json!({
            "name": name,
            "mimeType": FOLDER_MIME,
            "parents": [parent_id],
        });

        self.create_file(metadata, "folder create").await
    }

    async fn create_document(&self, title: &str, parent_id: &str) -> Result<String> {
        let metadata = json!({
            "name": title,
            "mimeType": DOCUMENT_MIME,
            "parents": [parent_id],
        });

        self.create_file(metadata, "document create").await
    }

    async fn move_file(&self, file_id: &str, folder_id: &str) -> Result<()> {
        let token = self.auth.access_token().await?;

        let response = self
            .client
            .get(format!("{API_BASE}/files/{file_id}"))
            .bearer_auth(&token)
            .query(&[("fields", "parents")])
            .send()
            .await?;
        let current: FileParents = checked(response, "parent lookup").await?.json().await?;
        let previous = current.parents.join(",");

        let response = self
            .client
            .patch(format!("{API_BASE}/files/{file_id}"))
            .bearer_auth(&token)
            .query(&[
                ("addParents", folder_id),
                ("removeParents", previous.as_str()),
                ("fields", "id, parents"),
            ])
            .json(&json!({}))
            .send()
            .await?;
        checked(response, "file move").await?;

        Ok(())
    }

    async fn upload_text_file(
        &self,
        name: &str,
        parent_id: &str,
        content: &str,
    ) -> Result<String> {
        let metadata = json!({
            "name": name,
            "mimeType": "text/plain",
            "parents": [parent_id],
        });

        let file_id = self.create_file(metadata, "file create").await?;

        let token = self.auth.access_token().await?;
        let response = self
            .client
            .patch(format!("{UPLOAD_BASE}/files/{file_id}"))
            .bearer_auth(&token)
            .query(&[("uploadType", "media")])
            .header("Content-Type", "text/plain; charset=utf-8")
            .body(content.to_string())
            .send()
            .await?;
        checked(response, "content upload").await?;

        Ok(file_id)
    }
}
