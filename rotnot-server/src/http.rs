//! HTTP routes for detection and recipe generation

use crate::state::AppState;
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use rotnot_recipes::{RecipeDetail, RecipeError};
use rotnot_vision::{aggregate, decode, food_detections, DynamicImage, FoodSummary, VisionError};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub model_loaded: bool,
}

#[derive(Debug, Deserialize)]
pub struct Base64ImageRequest {
    pub image: String,
}

#[derive(Debug, Serialize)]
pub struct DetectionResponse {
    pub success: bool,
    pub foods: Vec<FoodSummary>,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct RecipeNamesRequest {
    pub ingredients: Vec<String>,
    #[serde(default = "default_num_recipes")]
    pub num_recipes: usize,
}

fn default_num_recipes() -> usize {
    3
}

#[derive(Debug, Serialize)]
pub struct RecipeNamesResponse {
    pub success: bool,
    pub recipes: Vec<String>,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct FullRecipeRequest {
    pub recipe_name: String,
    pub available_ingredients: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct FullRecipeResponse {
    pub success: bool,
    pub recipe_name: String,
    pub full_description: String,
    pub message: String,
}

/// Create the HTTP router with all API routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/detect", post(detect_handler))
        .route("/detect/base64", post(detect_base64_handler))
        .route("/recipes/suggest", post(suggest_recipes_handler))
        .route("/recipes/full", post(full_recipe_handler))
        .route("/recipes/surprise", post(surprise_recipe_handler))
        .with_state(state)
}

fn bad_request(code: &str, message: impl Into<String>) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.into(),
            code: code.to_string(),
        }),
    )
}

fn vision_error_response(err: VisionError) -> ApiError {
    let (status, code) = match &err {
        VisionError::Decode(_) => (StatusCode::BAD_REQUEST, "DECODE_ERROR"),
        VisionError::Model(_) => (StatusCode::SERVICE_UNAVAILABLE, "MODEL_UNAVAILABLE"),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "DETECTION_ERROR"),
    };
    if status.is_server_error() {
        error!("Detection failed: {}", err);
    } else {
        warn!("Detection request rejected: {}", err);
    }
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
            code: code.to_string(),
        }),
    )
}

fn recipe_error_response(err: RecipeError) -> ApiError {
    let (status, code) = match &err {
        RecipeError::EmptyIngredients | RecipeError::EmptyRecipeName => {
            (StatusCode::BAD_REQUEST, "INVALID_INPUT")
        }
        RecipeError::NoSuggestion => (StatusCode::NOT_FOUND, "NO_SUGGESTION"),
        RecipeError::Generation(_) => (StatusCode::INTERNAL_SERVER_ERROR, "GENERATION_ERROR"),
    };
    if status.is_server_error() {
        error!("Recipe generation failed: {}", err);
    } else {
        warn!("Recipe request rejected: {}", err);
    }
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
            code: code.to_string(),
        }),
    )
}

async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse {
        message: "RotNot API is running".to_string(),
        status: "ok".to_string(),
    })
}

async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        model_loaded: state.detector_loaded(),
    })
}

/// Decode → detect → aggregate, shared by both detect endpoints.
async fn run_detection(
    state: &AppState,
    image: DynamicImage,
) -> Result<Json<DetectionResponse>, ApiError> {
    let detector = state.detector().await.map_err(vision_error_response)?;

    let raw = tokio::task::spawn_blocking(move || detector.detect(&image))
        .await
        .map_err(|e| {
            error!("Detection task failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Detection failed".to_string(),
                    code: "DETECTION_ERROR".to_string(),
                }),
            )
        })?
        .map_err(vision_error_response)?;

    let foods = aggregate(&food_detections(&raw));
    let message = if foods.is_empty() {
        "No food items detected".to_string()
    } else {
        format!("Detected {} food type(s)", foods.len())
    };
    info!("{}", message);

    Ok(Json(DetectionResponse {
        success: true,
        foods,
        message,
    }))
}

async fn detect_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<DetectionResponse>, ApiError> {
    let mut image_bytes = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| bad_request("INVALID_UPLOAD", format!("Invalid multipart body: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let is_image = field
            .content_type()
            .map(|ct| ct.starts_with("image/"))
            .unwrap_or(false);
        if !is_image {
            return Err(bad_request("INVALID_UPLOAD", "File must be an image"));
        }

        image_bytes = Some(field.bytes().await.map_err(|e| {
            bad_request("INVALID_UPLOAD", format!("Failed to read upload: {}", e))
        })?);
        break;
    }

    let bytes =
        image_bytes.ok_or_else(|| bad_request("INVALID_UPLOAD", "No image file provided"))?;
    let image = decode::decode_image(&bytes).map_err(vision_error_response)?;

    run_detection(&state, image).await
}

async fn detect_base64_handler(
    State(state): State<AppState>,
    Json(request): Json<Base64ImageRequest>,
) -> Result<Json<DetectionResponse>, ApiError> {
    let image = decode::decode_base64_image(&request.image).map_err(vision_error_response)?;
    run_detection(&state, image).await
}

async fn suggest_recipes_handler(
    State(state): State<AppState>,
    Json(request): Json<RecipeNamesRequest>,
) -> Result<Json<RecipeNamesResponse>, ApiError> {
    if request.ingredients.is_empty() {
        return Err(recipe_error_response(RecipeError::EmptyIngredients));
    }

    let generator = state
        .generator()
        .await
        .map_err(|e| recipe_error_response(RecipeError::Generation(e)))?;

    let recipes = generator
        .suggest_names(&request.ingredients, request.num_recipes)
        .await
        .map_err(recipe_error_response)?;

    // Zero usable names is still a success on this endpoint
    let message = format!("Generated {} recipe suggestion(s)", recipes.len());
    Ok(Json(RecipeNamesResponse {
        success: true,
        recipes,
        message,
    }))
}

async fn full_recipe_handler(
    State(state): State<AppState>,
    Json(request): Json<FullRecipeRequest>,
) -> Result<Json<FullRecipeResponse>, ApiError> {
    if request.recipe_name.is_empty() {
        return Err(recipe_error_response(RecipeError::EmptyRecipeName));
    }

    let generator = state
        .generator()
        .await
        .map_err(|e| recipe_error_response(RecipeError::Generation(e)))?;

    let detail = generator
        .full_recipe(&request.recipe_name, request.available_ingredients.as_deref())
        .await
        .map_err(recipe_error_response)?;

    Ok(Json(full_recipe_response(
        detail,
        "Recipe generated successfully",
    )))
}

async fn surprise_recipe_handler(
    State(state): State<AppState>,
    Json(request): Json<RecipeNamesRequest>,
) -> Result<Json<FullRecipeResponse>, ApiError> {
    if request.ingredients.is_empty() {
        return Err(recipe_error_response(RecipeError::EmptyIngredients));
    }

    let generator = state
        .generator()
        .await
        .map_err(|e| recipe_error_response(RecipeError::Generation(e)))?;

    let detail = generator
        .surprise(&request.ingredients)
        .await
        .map_err(recipe_error_response)?;

    Ok(Json(full_recipe_response(detail, "Surprise recipe generated!")))
}

fn full_recipe_response(detail: RecipeDetail, message: &str) -> FullRecipeResponse {
    FullRecipeResponse {
        success: true,
        recipe_name: detail.recipe_name,
        full_description: detail.full_description,
        message: message.to_string(),
    }
}
