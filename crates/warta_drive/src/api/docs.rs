use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use warta_core::Result;

use crate::auth::GoogleAuth;

use super::{checked, DocsApi};

const API_BASE: &str = "https://docs.googleapis.com/v1";

#[derive(Deserialize)]
struct CreatedDocument {
    #[serde(rename = "documentId")]
    document_id: String,
}

/// Docs v1 REST client.
pub struct GoogleDocs {
    client: Client,
    auth: Arc<GoogleAuth>,
}

impl GoogleDocs {
    pub fn new(client: Client, auth: Arc<GoogleAuth>) -> Self {
        Self { client, auth }
    }
}

#[async_trait]
impl DocsApi for GoogleDocs {
    async fn create_document(&self, title: &str) -> Result<String> {
        let token = self.auth.access_token().await?;

        let response = self
            .client
            .post(format!("{API_BASE}/documents"))
            .bearer_auth(&token)
            .json(&json!({ "title": title }))
            .send()
            .await?;

        let document: CreatedDocument = checked(response, "document create").await?.json().await?;
        Ok(document.document_id)
    }

    async fn insert_text(&self, document_id: &str, text: &str) -> Result<()> {
        let token = self.auth.access_token().await?;
        let body = json!({
            "requests": [{
                "insertText": {
                    "location": { "index": 1 },
                    "text": text,
                }
            }]
        });

        let response = self
            .client
            .post(format!("{API_BASE}/documents/{document_id}:batchUpdate"))
            .bearer_auth(&token)
            .json(&body)
            .send()
            .await?;
        checked(response, "content insert").await?;

        Ok(())
    }
}
