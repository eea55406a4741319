//! Recipe generation pipelines

use crate::error::{RecipeError, Result};
use crate::parse::parse_recipe_names;
use crate::prompt::{full_recipe_prompt, name_suggestion_prompt};
use rotnot_llm::GenerationClient;
use serde::Serialize;
use tracing::{debug, info};

/// Output budget for short list output
const NAME_SUGGESTION_MAX_TOKENS: u32 = 200;
/// Output budget for long-form recipe text
const FULL_RECIPE_MAX_TOKENS: u32 = 1024;

/// A named recipe with its verbatim long-form description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeDetail {
    pub recipe_name: String,
    pub full_description: String,
}

pub struct RecipeGenerator {
    client: GenerationClient,
}

impl RecipeGenerator {
    pub fn new(client: GenerationClient) -> Self {
        Self { client }
    }

    pub fn provider_name(&self) -> &'static str {
        self.client.provider_name()
    }

    /// Suggest up to `count` recipe names for the given ingredients.
    ///
    /// An empty parsed list is a valid result, not an error. Empty
    /// ingredients are rejected before any remote call.
    pub async fn suggest_names(&self, ingredients: &[String], count: usize) -> Result<Vec<String>> {
        if ingredients.is_empty() {
            return Err(RecipeError::EmptyIngredients);
        }

        let prompt = name_suggestion_prompt(ingredients, count);
        let response = self
            .client
            .complete(prompt, NAME_SUGGESTION_MAX_TOKENS)
            .await?;

        let names = parse_recipe_names(&response, count);
        debug!("Parsed {} recipe name(s) from response", names.len());
        Ok(names)
    }

    /// Generate the full recipe text for one named recipe.
    ///
    /// The returned description is the service output verbatim, trimmed; its
    /// internal structure is not validated here.
    pub async fn full_recipe(
        &self,
        recipe_name: &str,
        available_ingredients: Option<&[String]>,
    ) -> Result<RecipeDetail> {
        if recipe_name.is_empty() {
            return Err(RecipeError::EmptyRecipeName);
        }

        let prompt = full_recipe_prompt(recipe_name, available_ingredients);
        let response = self.client.complete(prompt, FULL_RECIPE_MAX_TOKENS).await?;

        Ok(RecipeDetail {
            recipe_name: recipe_name.to_string(),
            full_description: response.trim().to_string(),
        })
    }

    /// Two-stage pipeline: generate exactly one recipe name, then expand it
    /// into a full recipe scoped to the given ingredients.
    ///
    /// Unlike `suggest_names`, an empty name result is a terminal failure
    /// here; the detail stage is never invoked without a name.
    pub async fn surprise(&self, ingredients: &[String]) -> Result<RecipeDetail> {
        let names = self.suggest_names(ingredients, 1).await?;

        let name = names.into_iter().next().ok_or(RecipeError::NoSuggestion)?;
        info!("Surprise pipeline selected recipe: {}", name);

        self.full_recipe(&name, Some(ingredients)).await
    }
}
