//! rotnot-llm: text-generation providers for RotNot
//!
//! One opaque `complete` call per request against an OpenAI-compatible chat
//! completions endpoint. No retries, no streaming; retry/timeout policy
//! belongs to the caller's deployment, not here.

pub mod client;
pub mod config;
pub mod error;
pub mod providers;

#[cfg(test)]
mod providers_tests;

pub use client::GenerationClient;
pub use config::*;
pub use error::{LlmError, Result};
pub use providers::TextGeneration;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_env_var_names() {
        assert_eq!(Provider::HuggingFace.env_var_name(), "HF_TOKEN");
        assert_eq!(Provider::OpenAI.env_var_name(), "OPENAI_API_KEY");
    }

    #[test]
    fn test_provider_from_str() {
        assert_eq!(Provider::from_str("huggingface"), Some(Provider::HuggingFace));
        assert_eq!(Provider::from_str("OpenAI"), Some(Provider::OpenAI));
        assert_eq!(Provider::from_str("invalid"), None);
    }

    #[test]
    fn test_generation_config_default() {
        let config = GenerationConfig::default();
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.top_p, 0.9);
        assert_eq!(config.model, "meta-llama/Llama-3.1-70B-Instruct");
    }
}
