#[cfg(test)]
mod providers_tests {
    use crate::config::CompletionRequest;
    use crate::error::LlmError;
    use crate::providers::huggingface::HuggingFaceProvider;
    use crate::providers::openai::OpenAIProvider;
    use crate::providers::{truncate_error_body, TextGeneration};

    fn request(prompt: &str) -> CompletionRequest {
        CompletionRequest {
            prompt: prompt.to_string(),
            model: None,
            max_tokens: Some(64),
            temperature: None,
            top_p: None,
        }
    }

    #[test]
    fn test_provider_names() {
        assert_eq!(HuggingFaceProvider::new().name(), "huggingface");
        assert_eq!(OpenAIProvider::new().name(), "openai");
    }

    #[test]
    fn test_api_key_lifecycle() {
        let mut provider = HuggingFaceProvider::new();
        assert!(!provider.has_api_key());
        provider.set_api_key("hf_test".to_string());
        assert!(provider.has_api_key());
    }

    #[test]
    fn test_with_api_key_constructor() {
        let provider = OpenAIProvider::with_api_key("sk-test".to_string());
        assert!(provider.has_api_key());
    }

    #[tokio::test]
    async fn test_complete_without_key_fails_before_network() {
        let provider = HuggingFaceProvider::new();
        let result = provider.complete(request("hello")).await;
        match result.unwrap_err() {
            LlmError::MissingApiKey(name) => assert!(name.contains("HuggingFace")),
            other => panic!("Expected MissingApiKey, got {:?}", other),
        }
    }

    #[test]
    fn test_error_body_short_passthrough() {
        assert_eq!(truncate_error_body("bad gateway"), "bad gateway");
    }

    #[test]
    fn test_error_body_truncated_at_limit() {
        let body = "x".repeat(900);
        let truncated = truncate_error_body(&body);
        assert_eq!(truncated.len(), 500);
    }

    #[test]
    fn test_error_body_truncation_respects_char_boundaries() {
        // Byte 500 lands mid-character; truncation must back off to the
        // previous boundary instead of panicking.
        let body = format!("{}{}", "a".repeat(499), "é".repeat(4));
        let truncated = truncate_error_body(&body);
        assert_eq!(truncated, "a".repeat(499));
    }

    #[test]
    fn test_error_body_truncation_all_multibyte() {
        let body = "é".repeat(300); // 600 bytes
        let truncated = truncate_error_body(&body);
        assert_eq!(truncated.len(), 500);
        assert!(truncated.chars().all(|c| c == 'é'));
    }

    #[tokio::test]
    async fn test_openai_complete_without_key_fails() {
        let provider = OpenAIProvider::new();
        assert!(matches!(
            provider.complete(request("hello")).await,
            Err(LlmError::MissingApiKey(_))
        ));
    }
}
