//! Process-wide generation client
//!
//! Holds one configured provider behind the `TextGeneration` trait. Built
//! once per process and shared read-only across requests.

use crate::config::{CompletionRequest, GenerationConfig, Provider};
use crate::error::{LlmError, Result};
use crate::providers::huggingface::HuggingFaceProvider;
use crate::providers::openai::OpenAIProvider;
use crate::providers::TextGeneration;
use std::env;
use std::sync::Arc;
use tracing::info;

pub struct GenerationClient {
    provider: Arc<dyn TextGeneration>,
    config: GenerationConfig,
}

impl GenerationClient {
    pub fn new(provider: Arc<dyn TextGeneration>, config: GenerationConfig) -> Self {
        Self { provider, config }
    }

    /// Build a client from environment keys. HF_TOKEN wins over
    /// OPENAI_API_KEY; neither set is a hard error.
    pub fn from_env() -> Result<Self> {
        let config = GenerationConfig::default();

        if let Ok(key) = env::var(Provider::HuggingFace.env_var_name()) {
            if !key.is_empty() {
                info!("Text generation via HuggingFace ({})", config.model);
                let provider = HuggingFaceProvider::with_api_key(key);
                return Ok(Self::new(Arc::new(provider), config));
            }
        }

        if let Ok(key) = env::var(Provider::OpenAI.env_var_name()) {
            if !key.is_empty() {
                let config = GenerationConfig {
                    model: "gpt-4o-mini".to_string(),
                    ..config
                };
                info!("Text generation via OpenAI ({})", config.model);
                let provider = OpenAIProvider::with_api_key(key);
                return Ok(Self::new(Arc::new(provider), config));
            }
        }

        Err(LlmError::MissingApiKey(
            "no HF_TOKEN or OPENAI_API_KEY in environment".to_string(),
        ))
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// One completion call with the configured model and sampling, and a
    /// caller-supplied output budget.
    pub async fn complete(&self, prompt: String, max_tokens: u32) -> Result<String> {
        let request = CompletionRequest {
            prompt,
            model: Some(self.config.model.clone()),
            max_tokens: Some(max_tokens),
            temperature: Some(self.config.temperature),
            top_p: Some(self.config.top_p),
        };
        let response = self.provider.complete(request).await?;
        Ok(response.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CompletionResponse;
    use async_trait::async_trait;

    struct EchoProvider;

    #[async_trait]
    impl TextGeneration for EchoProvider {
        fn name(&self) -> &'static str {
            "echo"
        }

        fn has_api_key(&self) -> bool {
            true
        }

        fn set_api_key(&mut self, _key: String) {}

        async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
            Ok(CompletionResponse {
                content: format!("echo: {}", request.prompt),
                model: request.model.unwrap_or_default(),
                finish_reason: Some("stop".to_string()),
            })
        }
    }

    #[tokio::test]
    async fn test_complete_passes_configured_model() {
        let client = GenerationClient::new(Arc::new(EchoProvider), GenerationConfig::default());
        let out = client.complete("hello".to_string(), 32).await.unwrap();
        assert_eq!(out, "echo: hello");
        assert_eq!(client.provider_name(), "echo");
    }
}
