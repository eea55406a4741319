use rotnot_llm::LlmError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("No ingredients provided")]
    EmptyIngredients,

    #[error("No recipe name provided")]
    EmptyRecipeName,

    #[error("Could not generate a recipe suggestion")]
    NoSuggestion,

    #[error("Generation failed: {0}")]
    Generation(#[from] LlmError),
}

pub type Result<T> = std::result::Result<T, RecipeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_suggestion_display() {
        let err = RecipeError::NoSuggestion;
        assert!(err.to_string().contains("Could not generate"));
    }

    #[test]
    fn test_generation_wraps_llm_error() {
        let err: RecipeError = LlmError::RateLimit.into();
        match err {
            RecipeError::Generation(LlmError::RateLimit) => {}
            _ => panic!("Expected Generation(RateLimit)"),
        }
    }
}
