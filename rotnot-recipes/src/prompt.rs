//! Prompt builders for the generation service

/// Prompt for a short list of recipe names, one per line, numbered.
pub fn name_suggestion_prompt(ingredients: &[String], count: usize) -> String {
    let ingredients_str = ingredients.join(", ");
    format!(
        "You are a professional chef. Given these ingredients: {ingredients_str}\n\n\
         Suggest exactly {count} recipe names that can be made using some or all of these ingredients.\n\
         Return ONLY the recipe names, one per line, numbered.\n\
         Do not include descriptions or additional text."
    )
}

/// Prompt for one full recipe, structured as labeled free-text sections.
pub fn full_recipe_prompt(recipe_name: &str, available_ingredients: Option<&[String]>) -> String {
    let ingredient_context = match available_ingredients {
        Some(items) if !items.is_empty() => {
            format!("\nAvailable ingredients: {}", items.join(", "))
        }
        _ => String::new(),
    };

    format!(
        "You are a professional chef. Provide a complete recipe for: {recipe_name}{ingredient_context}\n\n\
         Please include:\n\
         1. Recipe name\n\
         2. Brief description\n\
         3. Servings\n\
         4. Prep time and cook time\n\
         5. Complete list of ingredients with measurements\n\
         6. Step-by-step cooking instructions\n\
         7. Any helpful tips\n\n\
         Format the response clearly with sections."
    )
}
