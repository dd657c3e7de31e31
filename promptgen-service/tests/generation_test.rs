//! End-to-end tests for the Gemini-backed endpoints, with Gemini replaced by
//! a wiremock server.

mod common;

use axum::http::StatusCode;
use common::{gemini_body, TestApp, TEXT_MODEL, VISION_MODEL};
use reqwest::multipart;
use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, ResponseTemplate};

const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0, 0, 0, 13];

#[tokio::test]
async fn target_audience_returns_both_languages() {
    let app = TestApp::spawn().await;
    app.mock_generate(TEXT_MODEL, "dalam Bahasa Indonesia", "Pekerja muda urban.")
        .await;
    app.mock_generate(TEXT_MODEL, "in English", "Young urban professionals.")
        .await;

    let response = app
        .post_json(
            "/generate_target_audience",
            &json!({"product_name": "Kopi Susu", "product_category": "Minuman"}),
        )
        .await;

    assert_eq!(StatusCode::OK, response.status());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["audience_id"], "Pekerja muda urban.");
    assert_eq!(body["audience_en"], "Young urban professionals.");

    let requests = app.gemini.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert!(requests
        .iter()
        .all(|r| r.url.query() == Some("key=test-api-key")));
}

#[tokio::test]
async fn main_message_defaults_the_category() {
    let app = TestApp::spawn().await;
    app.mock_generate(TEXT_MODEL, "(kategori: Umum)", "Segar setiap hari.")
        .await;
    app.mock_generate(TEXT_MODEL, "(category: Umum)", "Fresh every day.")
        .await;

    let response = app
        .post_json("/generate_main_message", &json!({"product_name": "Jus Jeruk"}))
        .await;

    assert_eq!(StatusCode::OK, response.status());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message_id"], "Segar setiap hari.");
    assert_eq!(body["message_en"], "Fresh every day.");
}

#[tokio::test]
async fn copywriting_requires_a_product_name() {
    let app = TestApp::spawn().await;

    for route in ["/generate_target_audience", "/generate_main_message"] {
        let response = app
            .post_json(route, &json!({"product_category": "Minuman"}))
            .await;

        assert_eq!(StatusCode::BAD_REQUEST, response.status(), "{route}");
    }
    assert!(app.gemini.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn upstream_failure_maps_to_500_with_message() {
    let app = TestApp::spawn().await;
    app.mock_generate_failure(500).await;

    let response = app
        .post_json("/generate_target_audience", &json!({"product_name": "Kopi"}))
        .await;

    assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, response.status());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body["error"],
        "Failed to generate target audience from Gemini AI."
    );
    assert!(body["details"].as_str().unwrap().contains("upstream exploded"));
}

#[tokio::test]
async fn video_prompt_returns_model_json() {
    let app = TestApp::spawn().await;
    let model_output = json!({
        "prompt_id": "Prompt Indonesia",
        "prompt_en": "English prompt",
        "visual_audio_suggestions_id": "Saran",
        "visual_audio_suggestions_en": "Suggestions"
    });

    Mock::given(method("POST"))
        .and(path(format!("/models/{}:generateContent", TEXT_MODEL)))
        .and(body_string_contains("responseSchema"))
        .and(body_string_contains("Laptop Z"))
        .and(body_string_contains("gaya vlogging"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(gemini_body(&model_output.to_string())),
        )
        .expect(1)
        .mount(&app.gemini)
        .await;

    let response = app
        .post_json(
            "/generate_prompt",
            &json!({
                "product_name": "Laptop Z",
                "tone": "Antusias",
                "vlogging_mode": true,
                "voice_over_language": "en"
            }),
        )
        .await;

    assert_eq!(StatusCode::OK, response.status());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, model_output);
}

#[tokio::test]
async fn video_prompt_uses_saved_preference() {
    let app = TestApp::spawn().await;
    let saved = app
        .post_json(
            "/save_character_preference",
            &json!({"user_id": "creator", "character_option": "consistent"}),
        )
        .await;
    assert_eq!(StatusCode::OK, saved.status());

    Mock::given(method("POST"))
        .and(body_string_contains("konsisten dengan karakter yang telah digunakan"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_body(
            r#"{"prompt_id":"a","prompt_en":"b","visual_audio_suggestions_id":"c","visual_audio_suggestions_en":"d"}"#,
        )))
        .expect(1)
        .mount(&app.gemini)
        .await;

    let response = app
        .post_json(
            "/generate_prompt",
            &json!({"product_name": "Kopi", "user_id": "creator"}),
        )
        .await;

    assert_eq!(StatusCode::OK, response.status());
}

#[tokio::test]
async fn video_prompt_treats_null_vlogging_mode_as_off() {
    let app = TestApp::spawn().await;
    app.mock_generate(
        TEXT_MODEL,
        "Veo 3",
        r#"{"prompt_id":"a","prompt_en":"b","visual_audio_suggestions_id":"c","visual_audio_suggestions_en":"d"}"#,
    )
    .await;

    let response = app
        .post_json(
            "/generate_prompt",
            &json!({"product_name": "K", "vlogging_mode": null}),
        )
        .await;

    assert_eq!(StatusCode::OK, response.status());
    let requests = app.gemini.received_requests().await.unwrap();
    let sent = String::from_utf8_lossy(&requests[0].body);
    assert!(!sent.contains("gaya vlogging"));
}

#[tokio::test]
async fn video_prompt_rejects_non_json_model_output() {
    let app = TestApp::spawn().await;
    app.mock_generate(TEXT_MODEL, "Veo 3", "Sure! Here is your prompt.")
        .await;

    let response = app
        .post_json("/generate_prompt", &json!({"product_name": "Kopi"}))
        .await;

    assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, response.status());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Failed to get a valid response from Gemini AI.");
}

#[tokio::test]
async fn video_prompt_requires_a_product_name() {
    let app = TestApp::spawn().await;

    let response = app.post_json("/generate_prompt", &json!({"tone": "Lucu"})).await;

    assert_eq!(StatusCode::BAD_REQUEST, response.status());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Product name is required.");
}

#[tokio::test]
async fn overlong_fields_fail_validation() {
    let app = TestApp::spawn().await;

    let response = app
        .post_json("/generate_prompt", &json!({"product_name": "x".repeat(201)}))
        .await;

    assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, response.status());
}

#[tokio::test]
async fn photo_is_described_with_the_vision_model() {
    let app = TestApp::spawn().await;
    app.mock_generate(VISION_MODEL, "Berikan dalam Bahasa Indonesia", "Wanita berkacamata.")
        .await;
    app.mock_generate(VISION_MODEL, "Provide in English", "A woman with glasses.")
        .await;

    let form = multipart::Form::new()
        .text("language", "id")
        .part(
            "image",
            multipart::Part::bytes(PNG_BYTES.to_vec())
                .file_name("face.png")
                .mime_str("image/png")
                .unwrap(),
        );

    let response = app
        .client
        .post(format!("{}/generate_character_from_photo", app.address))
        .multipart(form)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(StatusCode::OK, response.status());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["character_description_id"], "Wanita berkacamata.");
    assert_eq!(body["character_description_en"], "A woman with glasses.");

    let requests = app.gemini.received_requests().await.unwrap();
    let sent: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(
        sent["contents"][0]["parts"][1]["inlineData"]["mimeType"],
        "image/png"
    );
}

#[tokio::test]
async fn photo_upload_rejects_missing_or_wrong_files() {
    let app = TestApp::spawn().await;
    let url = format!("{}/generate_character_from_photo", app.address);

    let no_image = multipart::Form::new().text("language", "en");
    let not_an_image = multipart::Form::new().part(
        "image",
        multipart::Part::bytes(b"hello".to_vec())
            .file_name("notes.txt")
            .mime_str("text/plain")
            .unwrap(),
    );
    let empty = multipart::Form::new().part(
        "image",
        multipart::Part::bytes(Vec::new())
            .file_name("empty.png")
            .mime_str("image/png")
            .unwrap(),
    );

    for form in [no_image, not_an_image, empty] {
        let response = app.client.post(&url).multipart(form).send().await.unwrap();
        assert_eq!(StatusCode::BAD_REQUEST, response.status());
    }
    assert!(app.gemini.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn ai_routes_are_rate_limited_per_ip() {
    let app = TestApp::spawn_with(|config| {
        config.http.rate_limit.requests = 1;
        config.http.rate_limit.window_seconds = 60;
    })
    .await;
    app.mock_generate(TEXT_MODEL, "Bahasa Indonesia", "a").await;
    app.mock_generate(TEXT_MODEL, "in English", "b").await;

    let body = json!({"product_name": "Kopi"});
    let first = app.post_json("/generate_main_message", &body).await;
    assert_eq!(StatusCode::OK, first.status());

    let second = app.post_json("/generate_main_message", &body).await;
    assert_eq!(StatusCode::TOO_MANY_REQUESTS, second.status());

    // Non-AI routes stay open.
    let health = app.get("/health").await;
    assert_eq!(StatusCode::OK, health.status());
}

#[tokio::test]
async fn gemini_rate_limit_surfaces_as_500() {
    let app = TestApp::spawn().await;
    app.mock_generate_failure(429).await;

    let response = app
        .post_json("/generate_main_message", &json!({"product_name": "Kopi"}))
        .await;

    assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, response.status());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Failed to generate main message from Gemini AI.");
    assert_eq!(body["details"], "Rate limited");
}

#[tokio::test]
async fn oversized_photo_is_rejected_with_413() {
    let app = TestApp::spawn_with(|config| config.http.max_upload_bytes = 1024).await;

    let form = multipart::Form::new().part(
        "image",
        multipart::Part::bytes(vec![0u8; 4096])
            .file_name("big.png")
            .mime_str("image/png")
            .unwrap(),
    );

    let response = app
        .client
        .post(format!("{}/generate_character_from_photo", app.address))
        .multipart(form)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(StatusCode::PAYLOAD_TOO_LARGE, response.status());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Uploaded image is too large.");
    assert!(app.gemini.received_requests().await.unwrap().is_empty());
}
