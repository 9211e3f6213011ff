//! End-to-end tests for the `/generate/*` endpoints against the mock provider.

mod common;

use common::TestApp;
use content_service::services::providers::mock::MockCompletionProvider;
use content_service::services::ProviderError;
use serde_json::{json, Value};

fn lamp() -> Value {
    json!({
        "product": {
            "name": "Arc Desk Lamp",
            "brand": "Lumen",
            "category": "Lighting",
            "features": ["Dimmable", "USB port"],
            "price": 49.99,
            "sku": "LMP-001"
        }
    })
}

/// Replies keyed on distinctive phrases from each prompt template.
fn scripted() -> MockCompletionProvider {
    MockCompletionProvider::with_responder(|prompt| {
        let reply = if prompt.contains("Meta Description: ...") {
            "Title: Lumen Arc Desk Lamp\nMeta Description: Warm, dimmable light for any desk."
        } else if prompt.contains("generate logical values for missing fields") {
            "Subcategory: Desk Lamps\nMaterials: [aluminium, steel]\nColors: Black, White"
        } else if prompt.contains("Only respond with the instagram marketing copy.") {
            "Light up your desk #lumen"
        } else if prompt.contains("Only respond with the facebook marketing copy.") {
            "Meet the Arc Desk Lamp."
        } else if prompt.contains("Only respond with the email marketing copy.") {
            "Subject: Your desk deserves better"
        } else if prompt.contains("DALL-E") {
            "A matte black desk lamp on a walnut desk, soft studio light"
        } else {
            "A slim, dimmable lamp with a built-in USB port."
        };
        Ok(reply.to_string())
    })
}

#[tokio::test]
async fn description_returns_generated_text() {
    let app = TestApp::spawn().await;

    let response = app.post_json("/generate/description", &lamp()).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert!(body["description"]
        .as_str()
        .expect("description should be a string")
        .starts_with("Mock response for: You are an expert eCommerce copywriter"));

    let prompts = app.provider.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("Product Name: Arc Desk Lamp"));
    assert!(prompts[0].contains("Dimmable, USB port"));
}

#[tokio::test]
async fn description_prompt_uses_requested_tone() {
    let app = TestApp::spawn().await;
    let mut body = lamp();
    body["tone"] = json!("playful");
    body["length"] = json!("short");

    let response = app.post_json("/generate/description", &body).await;

    assert_eq!(response.status().as_u16(), 200);
    let prompt = &app.provider.prompts()[0];
    assert!(prompt.contains("- Tone: playful"));
    assert!(prompt.contains("- Length: short ("));
}

#[tokio::test]
async fn empty_product_still_generates() {
    let app = TestApp::spawn().await;

    let response = app
        .post_json("/generate/description", &json!({ "product": {} }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    assert!(app.provider.prompts()[0].contains("Unnamed Product"));
}

#[tokio::test]
async fn seo_returns_parsed_title_and_description() {
    let app = TestApp::spawn_with(scripted()).await;

    let response = app.post_json("/generate/seo", &lamp()).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(
        body,
        json!({
            "seo": {
                "title": "Lumen Arc Desk Lamp",
                "description": "Warm, dimmable light for any desk."
            }
        })
    );
}

#[tokio::test]
async fn seo_omits_fields_missing_from_reply() {
    let app = TestApp::spawn_with(MockCompletionProvider::with_responder(|_| {
        Ok("Here is a great title for you".to_string())
    }))
    .await;

    let response = app.post_json("/generate/seo", &lamp()).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body, json!({ "seo": {} }));
}

#[tokio::test]
async fn marketing_defaults_to_email() {
    let app = TestApp::spawn_with(scripted()).await;

    let response = app.post_json("/generate/marketing", &lamp()).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["marketing"], "Subject: Your desk deserves better");
}

#[tokio::test]
async fn marketing_targets_requested_platform() {
    let app = TestApp::spawn_with(scripted()).await;
    let mut body = lamp();
    body["platform"] = json!("instagram");

    let response = app.post_json("/generate/marketing", &body).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["marketing"], "Light up your desk #lumen");
}

#[tokio::test]
async fn marketing_accepts_unknown_platform() {
    let app = TestApp::spawn().await;
    let mut body = lamp();
    body["platform"] = json!("linkedin");

    let response = app.post_json("/generate/marketing", &body).await;

    assert_eq!(response.status().as_u16(), 200);
    assert!(app.provider.prompts()[0].contains("linkedin"));
}

#[tokio::test]
async fn image_prompt_returns_generated_text() {
    let app = TestApp::spawn_with(scripted()).await;

    let response = app.post_json("/generate/image-prompt", &lamp()).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(
        body["image_prompt"],
        "A matte black desk lamp on a walnut desk, soft studio light"
    );
}

#[tokio::test]
async fn missing_fields_returns_parsed_map() {
    let app = TestApp::spawn_with(scripted()).await;

    let response = app.post_json("/generate/missing-fields", &lamp()).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(
        body,
        json!({
            "missing_fields": {
                "subcategory": "Desk Lamps",
                "materials": ["aluminium", "steel"],
                "colors": ["Black", "White"]
            }
        })
    );
}

#[tokio::test]
async fn all_returns_every_content_type() {
    let app = TestApp::spawn_with(scripted()).await;

    let response = app.post_json("/generate/all", &lamp()).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.expect("Failed to parse JSON");
    let content = &body["content"];
    assert_eq!(
        content["description"],
        "A slim, dimmable lamp with a built-in USB port."
    );
    assert_eq!(content["seo"]["title"], "Lumen Arc Desk Lamp");
    assert_eq!(
        content["marketing"],
        json!({
            "email": "Subject: Your desk deserves better",
            "instagram": "Light up your desk #lumen",
            "facebook": "Meet the Arc Desk Lamp."
        })
    );
    assert_eq!(content["missing_fields"]["subcategory"], "Desk Lamps");
    assert_eq!(
        content["image_prompt"],
        "A matte black desk lamp on a walnut desk, soft studio light"
    );
    assert_eq!(app.provider.prompts().len(), 7);
}

#[tokio::test]
async fn overlong_option_is_rejected() {
    let app = TestApp::spawn().await;
    let mut body = lamp();
    body["tone"] = json!("x".repeat(65));

    let response = app.post_json("/generate/description", &body).await;

    assert_eq!(response.status().as_u16(), 422);
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "Validation error");
    assert!(app.provider.prompts().is_empty());
}

#[tokio::test]
async fn missing_product_is_rejected() {
    let app = TestApp::spawn().await;

    let response = app
        .post_json("/generate/seo", &json!({ "tone": "fun" }))
        .await;

    assert_eq!(response.status().as_u16(), 422);
    assert!(app.provider.prompts().is_empty());
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(format!("{}/generate/description", app.address))
        .header("content-type", "application/json")
        .body("{\"product\": ")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn upstream_failure_maps_to_bad_gateway() {
    let app = TestApp::spawn_with(MockCompletionProvider::with_responder(|_| {
        Err(ProviderError::ApiError {
            status: 500,
            message: "upstream exploded".to_string(),
        })
    }))
    .await;

    let response = app.post_json("/generate/description", &lamp()).await;

    assert_eq!(response.status().as_u16(), 502);
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert!(body["error"]
        .as_str()
        .expect("error should be a string")
        .contains("upstream exploded"));
}

#[tokio::test]
async fn upstream_rate_limit_maps_to_too_many_requests() {
    let app = TestApp::spawn_with(MockCompletionProvider::with_responder(|_| {
        Err(ProviderError::RateLimited {
            retry_after_secs: Some(30),
        })
    }))
    .await;

    let response = app.post_json("/generate/image-prompt", &lamp()).await;

    assert_eq!(response.status().as_u16(), 429);
    assert_eq!(
        response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok()),
        Some("30")
    );
}

#[tokio::test]
async fn content_filter_maps_to_bad_request() {
    let app = TestApp::spawn_with(MockCompletionProvider::with_responder(|_| {
        Err(ProviderError::ContentFiltered)
    }))
    .await;

    let response = app.post_json("/generate/marketing", &lamp()).await;

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn unavailable_provider_maps_to_service_unavailable() {
    let app = TestApp::spawn_with(MockCompletionProvider::new(false)).await;

    let response = app.post_json("/generate/all", &lamp()).await;

    assert_eq!(response.status().as_u16(), 503);
}
