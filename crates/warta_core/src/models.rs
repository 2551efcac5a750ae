use async_trait::async_trait;

use crate::Result;

#[async_trait]
pub trait CompletionModel: Send + Sync {
    /// Human readable model name, for logs
    fn name(&self) -> &str;

    /// Send a single user prompt and return the generated text
    async fn complete(&self, prompt: &str) -> Result<String>;
}
