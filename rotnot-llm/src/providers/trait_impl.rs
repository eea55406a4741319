use crate::config::{CompletionRequest, CompletionResponse};
use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait TextGeneration: Send + Sync {
    /// Get the provider name
    fn name(&self) -> &'static str;

    /// Check if API key is set
    fn has_api_key(&self) -> bool;

    /// Set API key
    fn set_api_key(&mut self, key: String);

    /// Single prompt → completion call. Exactly one HTTP request; never
    /// retried here.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse>;
}
