//! rotnot-recipes: recipe orchestration for RotNot
//!
//! Turns ingredient lists into recipe name suggestions and full recipe text
//! through a remote text-generation service, and composes the two-stage
//! surprise pipeline (one name, then the full recipe for it).

pub mod error;
pub mod generator;
pub mod parse;
pub mod prompt;


pub use error::{RecipeError, Result};
pub use generator::{RecipeDetail, RecipeGenerator};
pub use parse::parse_recipe_names;
