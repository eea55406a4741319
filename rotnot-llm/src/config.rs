use serde::{Deserialize, Serialize};

/// Default generation model (matches the original deployment)
pub const DEFAULT_MODEL: &str = "meta-llama/Llama-3.1-70B-Instruct";

/// Sampling and budget defaults for recipe generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub model: String,
    pub temperature: f32,
    pub top_p: f32,
    pub max_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.7,
            top_p: 0.9,
            max_tokens: 1024,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Provider {
    HuggingFace,
    OpenAI,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::HuggingFace => "huggingface",
            Provider::OpenAI => "openai",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "huggingface" | "hf" => Some(Provider::HuggingFace),
            "openai" => Some(Provider::OpenAI),
            _ => None,
        }
    }

    pub fn env_var_name(&self) -> &'static str {
        match self {
            Provider::HuggingFace => "HF_TOKEN",
            Provider::OpenAI => "OPENAI_API_KEY",
        }
    }
}

/// A single prompt → completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub prompt: String,
    pub model: Option<String>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
    pub top_p: Option<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub content: String,
    pub model: String,
    pub finish_reason: Option<String>,
}
