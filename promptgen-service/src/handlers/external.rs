use crate::dtos::{ExternalPromptRequest, ExternalPromptResponse};
use crate::handlers::required;
use crate::prompts::external::{self, VideoPlatform};
use axum::Json;
use service_core::error::AppError;
use validator::Validate;

/// Canned prompt for a TikTok/YouTube/other link. Never calls the model.
pub async fn get_external_prompt(
    Json(request): Json<ExternalPromptRequest>,
) -> Result<Json<ExternalPromptResponse>, AppError> {
    request.validate()?;

    let video_url = required(request.video_url.as_deref(), "Video link is required.")?;
    let simulated = external::simulate(video_url);

    tracing::info!(
        platform = ?VideoPlatform::detect(video_url),
        "Simulated external prompt"
    );

    Ok(Json(ExternalPromptResponse {
        prompt: simulated.combined_prompt(),
        visual_audio_suggestions_id: simulated.visual_audio_id,
        visual_audio_suggestions_en: simulated.visual_audio_en,
    }))
}
