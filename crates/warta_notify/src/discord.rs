use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use reqwest::{Client, StatusCode};
use serde_json::json;
use tracing::{error, info};
use url::Url;

use warta_core::{Error, LinkNotifier, Result};

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// Posts the digest link to a Discord webhook. Only the webhook's
/// "no content" reply counts as delivered.
pub struct DiscordNotifier {
    client: Client,
    webhook_url: String,
}

impl DiscordNotifier {
    /// Read `DISCORD_WEBHOOK_URL` from the environment. The value is
    /// mandatory and must be a well-formed URL.
    pub fn from_env() -> Result<Self> {
        let webhook_url = std::env::var("DISCORD_WEBHOOK_URL")
            .ok()
            .filter(|value| !value.is_empty())
            .ok_or_else(|| Error::Config("DISCORD_WEBHOOK_URL is not set".to_string()))?;

        Self::new(webhook_url)
    }

    pub fn new(webhook_url: String) -> Result<Self> {
        Url::parse(&webhook_url)
            .map_err(|e| Error::Config(format!("DISCORD_WEBHOOK_URL is not a valid URL: {e}")))?;

        Ok(Self {
            client: Client::new(),
            webhook_url,
        })
    }

    fn message(doc_url: &str, date: NaiveDate) -> String {
        format!(
            "🗞️ **AI Daily News Digest - {}**\n\
             \n\
             📄 **Berita hari ini sudah siap!**\n\
             \n\
             Klik link di bawah untuk membaca analisis lengkap:\n\
             👉 {}\n\
             \n\
             {}\n\
             \n\
             📁 **Arsip:** Semua berita tersimpan rapi di Google Drive\n\
             🤖 **Powered by:** AI Multi-Agent System\n\
             ⏰ **Generated at:** {} WIB",
            date.format("%A, %d %B %Y"),
            doc_url,
            RULE,
            Local::now().format("%H:%M")
        )
    }
}

#[async_trait]
impl LinkNotifier for DiscordNotifier {
    async fn send_link(&self, doc_url: &str, date: NaiveDate) -> bool {
        let payload = json!({ "content": Self::message(doc_url, date) });

        match self.client.post(&self.webhook_url).json(&payload).send().await {
            Ok(response) if response.status() == StatusCode::NO_CONTENT => {
                info!("✅ Link delivered to Discord");
                true
            }
            Ok(response) => {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                error!("❌ Webhook rejected the message ({status}): {body}");
                false
            }
            Err(e) => {
                error!("❌ Failed to reach the webhook: {e}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_carries_the_link_and_date() {
        let date = NaiveDate::from_ymd_opt(2025, 8, 22).unwrap();
        let message =
            DiscordNotifier::message("https://docs.google.com/document/d/abc/edit", date);

        assert!(message.starts_with("🗞️ **AI Daily News Digest - Friday, 22 August 2025**"));
        assert!(message.contains("👉 https://docs.google.com/document/d/abc/edit"));
        assert!(message.contains(RULE));
        assert!(message.trim_end().ends_with("WIB"));
    }

    #[test]
    fn message_has_no_outer_whitespace() {
        let date = NaiveDate::from_ymd_opt(2025, 8, 22).unwrap();
        let message = DiscordNotifier::message("https://x", date);

        assert_eq!(message, message.trim());
    }

    #[test]
    fn malformed_webhook_url_is_a_config_error() {
        let result = DiscordNotifier::new("not a url".to_string());
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn wellformed_webhook_url_is_accepted() {
        let result = DiscordNotifier::new("https://discord.com/api/webhooks/1/abc".to_string());
        assert!(result.is_ok());
    }
}
