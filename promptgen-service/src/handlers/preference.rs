use crate::dtos::{
    PreferenceQuery, PreferenceResponse, SavePreferenceRequest, SavePreferenceResponse,
};
use crate::handlers::{or_default, required};
use crate::models::CharacterOption;
use crate::services::DEFAULT_USER_ID;
use crate::startup::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use service_core::error::AppError;
use validator::Validate;

#[tracing::instrument(skip(state, request))]
pub async fn save_character_preference(
    State(state): State<AppState>,
    Json(request): Json<SavePreferenceRequest>,
) -> Result<Json<SavePreferenceResponse>, AppError> {
    request.validate()?;

    let raw_option = required(
        request.character_option.as_deref(),
        "Character option is required.",
    )?;
    let option: CharacterOption = raw_option
        .parse()
        .map_err(|e| AppError::BadRequest(anyhow::Error::new(e)))?;
    let user_id = or_default(request.user_id, DEFAULT_USER_ID);

    state.preferences.save(&user_id, option);
    tracing::info!(user_id = %user_id, character_option = %option, "Saved character preference");

    Ok(Json(SavePreferenceResponse {
        message: "Character preference saved successfully.".to_string(),
        character_option: option.to_string(),
    }))
}

pub async fn get_character_preference(
    State(state): State<AppState>,
    Query(query): Query<PreferenceQuery>,
) -> Json<PreferenceResponse> {
    let user_id = or_default(query.user_id, DEFAULT_USER_ID);
    let option = state.preferences.get_or_default(&user_id);

    Json(PreferenceResponse {
        character_option: option.to_string(),
    })
}
