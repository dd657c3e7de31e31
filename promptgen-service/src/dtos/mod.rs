//! Request and response bodies of the HTTP API.
//!
//! Request fields are optional at the serde level so a missing required
//! field yields a 400 with a readable message instead of a JSON rejection.

use serde::{Deserialize, Serialize};
use validator::Validate;

// ---------------------------------------------------------------------------
// Preferences
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Validate)]
pub struct SavePreferenceRequest {
    #[validate(length(max = 128))]
    pub user_id: Option<String>,
    pub character_option: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SavePreferenceResponse {
    pub message: String,
    pub character_option: String,
}

#[derive(Debug, Deserialize)]
pub struct PreferenceQuery {
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PreferenceResponse {
    pub character_option: String,
}

// ---------------------------------------------------------------------------
// Copywriting
// ---------------------------------------------------------------------------

/// Body shared by the target-audience and main-message endpoints.
#[derive(Debug, Deserialize, Validate)]
pub struct ProductCopyRequest {
    #[validate(length(max = 200))]
    pub product_name: Option<String>,
    #[validate(length(max = 100))]
    pub product_category: Option<String>,
    /// Accepted for compatibility; both languages are always produced.
    pub language: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TargetAudienceResponse {
    pub audience_id: String,
    pub audience_en: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MainMessageResponse {
    pub message_id: String,
    pub message_en: String,
}

// ---------------------------------------------------------------------------
// Character from photo
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize)]
pub struct CharacterDescriptionResponse {
    pub character_description_id: String,
    pub character_description_en: String,
}

// ---------------------------------------------------------------------------
// Video prompt
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize, Validate)]
pub struct GeneratePromptRequest {
    #[validate(length(max = 200))]
    pub product_name: Option<String>,
    pub character_option: Option<String>,
    #[validate(length(max = 100))]
    pub tone: Option<String>,
    #[validate(length(max = 100))]
    pub style: Option<String>,
    #[validate(length(max = 100))]
    pub product_category: Option<String>,
    #[validate(length(max = 50))]
    pub video_length: Option<String>,
    #[validate(length(max = 1000))]
    pub target_audience: Option<String>,
    #[validate(length(max = 1000))]
    pub main_message: Option<String>,
    #[validate(length(max = 100))]
    pub brand_voice: Option<String>,
    /// Absent or null means off.
    pub vlogging_mode: Option<bool>,
    #[validate(length(max = 2000))]
    pub generated_character_description: Option<String>,
    pub voice_over_language: Option<String>,
    /// Looks up the saved character mode when `character_option` is absent.
    #[validate(length(max = 128))]
    pub user_id: Option<String>,
}

/// Model output for the video prompt; also the endpoint's response body.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct VideoPromptResponse {
    pub prompt_id: String,
    pub prompt_en: String,
    pub visual_audio_suggestions_id: String,
    pub visual_audio_suggestions_en: String,
}

// ---------------------------------------------------------------------------
// External prompt simulation
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Validate)]
pub struct ExternalPromptRequest {
    #[validate(length(max = 2048))]
    pub video_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExternalPromptResponse {
    pub prompt: String,
    pub visual_audio_suggestions_id: String,
    pub visual_audio_suggestions_en: String,
}
