use crate::config::{CompletionRequest, CompletionResponse, DEFAULT_MODEL};
use crate::error::{LlmError, Result};
use crate::providers::trait_impl::TextGeneration;
use async_trait::async_trait;
use parking_lot::RwLock;
use reqwest::Client;
use serde_json::json;
use std::sync::Arc;

/// Hugging Face Inference Providers router (OpenAI-compatible chat API)
pub struct HuggingFaceProvider {
    api_key: Arc<RwLock<Option<String>>>,
    client: Client,
    base_url: String,
}

impl HuggingFaceProvider {
    pub fn new() -> Self {
        Self {
            api_key: Arc::new(RwLock::new(None)),
            client: Client::new(),
            base_url: "https://router.huggingface.co/v1".to_string(),
        }
    }

    pub fn with_api_key(api_key: String) -> Self {
        let mut provider = Self::new();
        provider.set_api_key(api_key);
        provider
    }

    fn get_api_key(&self) -> Result<String> {
        self.api_key
            .read()
            .as_ref()
            .cloned()
            .ok_or_else(|| LlmError::MissingApiKey("HuggingFace".to_string()))
    }
}

impl Default for HuggingFaceProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextGeneration for HuggingFaceProvider {
    fn name(&self) -> &'static str {
        "huggingface"
    }

    fn has_api_key(&self) -> bool {
        self.api_key.read().is_some()
    }

    fn set_api_key(&mut self, key: String) {
        *self.api_key.write() = Some(key);
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        let api_key = self.get_api_key()?;
        let model = request
            .model
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        // Limit max_tokens to keep one call bounded
        let max_tokens = request.max_tokens.map(|t| t.min(4096)).unwrap_or(1024);

        let body = json!({
            "model": model,
            "messages": [{"role": "user", "content": request.prompt}],
            "max_tokens": max_tokens,
            "temperature": request.temperature.unwrap_or(0.7).clamp(0.0, 2.0),
            "top_p": request.top_p.unwrap_or(0.9).clamp(0.0, 1.0),
        });

        if !self.base_url.starts_with("https://") {
            return Err(LlmError::InvalidResponse("Invalid base URL".to_string()));
        }

        let url = format!("{}/chat/completions", self.base_url);
        tracing::debug!("Requesting completion from {} ({})", self.name(), model);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .timeout(std::time::Duration::from_secs(120))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status == 429 {
            return Err(LlmError::RateLimit);
        }
        if status == 401 || status == 403 {
            return Err(LlmError::AuthenticationFailed);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(LlmError::InvalidResponse(format!(
                "HTTP {}: {}",
                status,
                super::truncate_error_body(&text)
            )));
        }

        let json: serde_json::Value = response.json().await?;

        let choices = json
            .get("choices")
            .and_then(|c| c.as_array())
            .ok_or_else(|| {
                LlmError::InvalidResponse("Invalid response format: no choices array".to_string())
            })?;
        if choices.is_empty() {
            return Err(LlmError::InvalidResponse("No choices in response".to_string()));
        }

        let content = choices[0]["message"]["content"]
            .as_str()
            .unwrap_or("")
            .trim()
            .to_string();

        Ok(CompletionResponse {
            content,
            model: json["model"].as_str().unwrap_or(&model).to_string(),
            finish_reason: choices[0]["finish_reason"].as_str().map(|s| s.to_string()),
        })
    }
}
