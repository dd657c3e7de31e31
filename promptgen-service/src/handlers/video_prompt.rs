use crate::dtos::{GeneratePromptRequest, VideoPromptResponse};
use crate::handlers::{or_default, required};
use crate::models::CharacterOption;
use crate::prompts::video::{self, CharacterSource, VideoBrief, VoiceOver};
use crate::services::PreferenceStore;
use crate::startup::AppState;
use axum::{extract::State, Json};
use service_core::error::AppError;
use validator::Validate;

/// Resolve a request into a brief, filling the historic defaults.
fn brief_from_request(
    request: GeneratePromptRequest,
    product_name: String,
    preferences: &PreferenceStore,
) -> VideoBrief {
    let description = request
        .generated_character_description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty());

    let character = match description {
        Some(description) => CharacterSource::Described(description),
        None => {
            let mode = match (request.character_option.as_deref(), request.user_id.as_deref()) {
                (Some(option), _) => CharacterOption::from_lenient(option),
                (None, Some(user_id)) => preferences.get_or_default(user_id),
                (None, None) => CharacterOption::New,
            };
            CharacterSource::Mode(mode)
        }
    };

    let vlogging = request.vlogging_mode.unwrap_or(false).then(|| {
        VoiceOver::from_code(request.voice_over_language.as_deref().unwrap_or("id"))
    });

    VideoBrief {
        product_name,
        product_category: or_default(request.product_category, "Umum"),
        video_length: or_default(request.video_length, "8 detik"),
        tone: or_default(request.tone, "Informatif"),
        style: or_default(request.style, "Langsung"),
        main_message: or_default(request.main_message, "tidak ada pesan utama spesifik"),
        target_audience: or_default(request.target_audience, "audiens umum"),
        brand_voice: or_default(request.brand_voice, "Profesional"),
        character,
        vlogging,
    }
}

#[tracing::instrument(skip(state, request))]
pub async fn generate_prompt(
    State(state): State<AppState>,
    Json(request): Json<GeneratePromptRequest>,
) -> Result<Json<VideoPromptResponse>, AppError> {
    request.validate()?;

    let product_name = required(request.product_name.as_deref(), "Product name is required.")?
        .to_string();
    let brief = brief_from_request(request, product_name, &state.preferences);

    let output: VideoPromptResponse = state
        .generator
        .structured("video_prompt", &video::instruction(&brief), video::response_schema())
        .await
        .map_err(|e| AppError::upstream("Failed to get a valid response from Gemini AI.", e))?;

    tracing::info!(
        product_name = %brief.product_name,
        vlogging = brief.vlogging.is_some(),
        "Generated video prompt"
    );

    Ok(Json(output))
}
