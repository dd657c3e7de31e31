use crate::dtos::CharacterDescriptionResponse;
use crate::prompts::character;
use crate::services::providers::InlineImage;
use crate::startup::AppState;
use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use service_core::error::AppError;

/// An uploaded photo after validation.
struct Photo {
    file_name: String,
    mime_type: String,
    bytes: Vec<u8>,
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge("Uploaded image is too large.".to_string())
    } else {
        AppError::BadRequest(anyhow::anyhow!("Failed to read multipart body: {}", e))
    }
}

/// Pull the `image` part out of the form. Other parts (e.g. `language`) are
/// read and ignored: both languages are always produced.
async fn read_photo(multipart: &mut Multipart) -> Result<Photo, AppError> {
    let mut photo = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some("image") {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        if file_name.is_empty() {
            return Err(AppError::bad_request("No image file was selected."));
        }

        let mime_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field.bytes().await.map_err(multipart_error)?.to_vec();

        photo = Some(Photo {
            file_name,
            mime_type,
            bytes,
        });
    }

    let photo = photo.ok_or_else(|| AppError::bad_request("No image file was uploaded."))?;

    if photo.bytes.is_empty() {
        return Err(AppError::bad_request("The uploaded image file is empty."));
    }
    if !photo.mime_type.starts_with("image/") {
        return Err(AppError::bad_request(format!(
            "Unsupported file type '{}': upload an image.",
            photo.mime_type
        )));
    }

    Ok(photo)
}

#[tracing::instrument(skip(state, multipart))]
pub async fn generate_character_from_photo(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<CharacterDescriptionResponse>, AppError> {
    let photo = read_photo(&mut multipart).await?;

    tracing::info!(
        file_name = %photo.file_name,
        mime_type = %photo.mime_type,
        size = photo.bytes.len(),
        "Received character photo"
    );

    let image = InlineImage {
        mime_type: photo.mime_type,
        data: STANDARD.encode(&photo.bytes),
    };

    let prompts = character::describe_photo();
    let description = state
        .generator
        .bilingual(
            "character_from_photo",
            &prompts.id,
            &prompts.en,
            std::slice::from_ref(&image),
        )
        .await
        .map_err(|e| {
            AppError::upstream("Failed to describe the character from the image using AI.", e)
        })?;

    Ok(Json(CharacterDescriptionResponse {
        character_description_id: description.id,
        character_description_en: description.en,
    }))
}
