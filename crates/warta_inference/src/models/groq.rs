use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use warta_core::{CompletionModel, Error, Result};

const API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const MODEL: &str = "groq/compound";
const TEMPERATURE: f64 = 0.7;
const MAX_TOKENS: u32 = 1500;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

/// Chat-completion client for the Groq OpenAI-compatible endpoint.
pub struct GroqModel {
    client: Client,
    api_key: String,
}

impl fmt::Debug for GroqModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroqModel")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl GroqModel {
    /// Read `GROQ_API_KEY` from the environment. The key is mandatory.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GROQ_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| Error::Config("GROQ_API_KEY is not set".to_string()))?;

        Self::new(api_key)
    }

    pub fn new(api_key: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, api_key })
    }
}

#[async_trait]
impl CompletionModel for GroqModel {
    fn name(&self) -> &str {
        MODEL
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: MODEL,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(API_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Inference(format!("Groq returned {status}: {body}")));
        }

        let parsed: ChatResponse = response.json().await?;
        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| Error::Inference("Groq response contained no choices".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_payload_matches_the_api_shape() {
        let request = ChatRequest {
            model: MODEL,
            messages: vec![ChatMessage {
                role: "user",
                content: "halo",
            }],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "groq/compound");
        assert_eq!(value["temperature"], 0.7);
        assert_eq!(value["max_tokens"], 1500);
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["content"], "halo");
    }

    #[test]
    fn response_parsing_takes_the_first_choice() {
        let raw = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "Analisis pertama"}},
                {"message": {"role": "assistant", "content": "Analisis kedua"}}
            ]
        }"#;

        let parsed: ChatResponse = serde_json::from_str(raw).unwrap();
        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .unwrap();

        assert_eq!(content, "Analisis pertama");
    }

    #[test]
    fn missing_key_is_a_config_error() {
        std::env::remove_var("GROQ_API_KEY");
        let result = GroqModel::from_env();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn debug_output_redacts_the_key() {
        let model = GroqModel::new("gsk_secret".to_string()).unwrap();
        let debug = format!("{model:?}");
        assert!(!debug.contains("gsk_secret"));
        assert!(debug.contains("<redacted>"));
    }
}
