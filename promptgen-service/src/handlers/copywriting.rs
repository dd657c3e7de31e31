use crate::dtos::{MainMessageResponse, ProductCopyRequest, TargetAudienceResponse};
use crate::handlers::{or_default, required};
use crate::prompts::copywriting;
use crate::startup::AppState;
use axum::{extract::State, Json};
use service_core::error::AppError;
use validator::Validate;

const DEFAULT_CATEGORY: &str = "Umum";

#[tracing::instrument(skip(state, request))]
pub async fn generate_target_audience(
    State(state): State<AppState>,
    Json(request): Json<ProductCopyRequest>,
) -> Result<Json<TargetAudienceResponse>, AppError> {
    request.validate()?;

    let product_name = required(
        request.product_name.as_deref(),
        "Product name is required to generate a target audience.",
    )?;
    let category = or_default(request.product_category.clone(), DEFAULT_CATEGORY);

    let prompts = copywriting::target_audience(product_name, &category);
    let audience = state
        .generator
        .bilingual("target_audience", &prompts.id, &prompts.en, &[])
        .await
        .map_err(|e| AppError::upstream("Failed to generate target audience from Gemini AI.", e))?;

    tracing::info!(product_name = %product_name, "Generated target audience");

    Ok(Json(TargetAudienceResponse {
        audience_id: audience.id,
        audience_en: audience.en,
    }))
}

#[tracing::instrument(skip(state, request))]
pub async fn generate_main_message(
    State(state): State<AppState>,
    Json(request): Json<ProductCopyRequest>,
) -> Result<Json<MainMessageResponse>, AppError> {
    request.validate()?;

    let product_name = required(
        request.product_name.as_deref(),
        "Product name is required to generate a main message.",
    )?;
    let category = or_default(request.product_category.clone(), DEFAULT_CATEGORY);

    let prompts = copywriting::main_message(product_name, &category);
    let message = state
        .generator
        .bilingual("main_message", &prompts.id, &prompts.en, &[])
        .await
        .map_err(|e| AppError::upstream("Failed to generate main message from Gemini AI.", e))?;

    tracing::info!(product_name = %product_name, "Generated main message");

    Ok(Json(MainMessageResponse {
        message_id: message.id,
        message_en: message.en,
    }))
}
