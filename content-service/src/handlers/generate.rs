use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{
    content::{DEFAULT_LENGTH, DEFAULT_STYLE, DEFAULT_TONE},
    AllContent, GenerationOptions, MissingFields, Platform, Product, SeoElements,
};
use crate::startup::AppState;
use service_core::error::AppError;

/// Body accepted by every `/generate/*` endpoint.
#[derive(Debug, Deserialize, Validate)]
pub struct ProductRequest {
    pub product: Product,
    #[validate(length(max = 64, message = "tone must be at most 64 characters"))]
    pub tone: Option<String>,
    #[validate(length(max = 64, message = "length must be at most 64 characters"))]
    pub length: Option<String>,
    #[validate(length(max = 64, message = "style must be at most 64 characters"))]
    pub style: Option<String>,
    #[validate(length(max = 64, message = "platform must be at most 64 characters"))]
    pub platform: Option<String>,
}

impl ProductRequest {
    pub fn options(&self) -> GenerationOptions {
        GenerationOptions {
            tone: self.tone.clone().unwrap_or_else(|| DEFAULT_TONE.to_string()),
            length: self
                .length
                .clone()
                .unwrap_or_else(|| DEFAULT_LENGTH.to_string()),
            style: self.style.clone().unwrap_or_else(|| DEFAULT_STYLE.to_string()),
        }
    }

    pub fn platform(&self) -> Platform {
        self.platform
            .as_deref()
            .map(Platform::from)
            .unwrap_or_default()
    }
}

#[derive(Debug, Serialize)]
pub struct DescriptionResponse {
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct SeoResponse {
    pub seo: SeoElements,
}

#[derive(Debug, Serialize)]
pub struct MarketingResponse {
    pub marketing: String,
}

#[derive(Debug, Serialize)]
pub struct ImagePromptResponse {
    pub image_prompt: String,
}

#[derive(Debug, Serialize)]
pub struct MissingFieldsResponse {
    pub missing_fields: MissingFields,
}

#[derive(Debug, Serialize)]
pub struct AllContentResponse {
    pub content: AllContent,
}

#[tracing::instrument(skip(state, request))]
pub async fn generate_description(
    State(state): State<AppState>,
    Json(request): Json<ProductRequest>,
) -> Result<Json<DescriptionResponse>, AppError> {
    request.validate()?;

    let description = state
        .generator
        .description(&request.product, &request.options())
        .await?;

    Ok(Json(DescriptionResponse { description }))
}

#[tracing::instrument(skip(state, request))]
pub async fn generate_seo(
    State(state): State<AppState>,
    Json(request): Json<ProductRequest>,
) -> Result<Json<SeoResponse>, AppError> {
    request.validate()?;

    let seo = state
        .generator
        .seo(&request.product, &request.options())
        .await?;

    if seo.title.is_none() && seo.description.is_none() {
        tracing::warn!("SEO reply contained neither a title nor a meta description");
    }

    Ok(Json(SeoResponse { seo }))
}

#[tracing::instrument(skip(state, request), fields(platform = tracing::field::Empty))]
pub async fn generate_marketing(
    State(state): State<AppState>,
    Json(request): Json<ProductRequest>,
) -> Result<Json<MarketingResponse>, AppError> {
    request.validate()?;

    let platform = request.platform();
    tracing::Span::current().record("platform", platform.as_str());

    let marketing = state
        .generator
        .marketing(&request.product, &platform, &request.options())
        .await?;

    Ok(Json(MarketingResponse { marketing }))
}

/// Tone, length, style and platform are ignored here.
#[tracing::instrument(skip(state, request))]
pub async fn generate_image_prompt(
    State(state): State<AppState>,
    Json(request): Json<ProductRequest>,
) -> Result<Json<ImagePromptResponse>, AppError> {
    request.validate()?;

    let image_prompt = state.generator.image_prompt(&request.product).await?;

    Ok(Json(ImagePromptResponse { image_prompt }))
}

#[tracing::instrument(skip(state, request))]
pub async fn generate_missing_fields(
    State(state): State<AppState>,
    Json(request): Json<ProductRequest>,
) -> Result<Json<MissingFieldsResponse>, AppError> {
    request.validate()?;

    let missing_fields = state.generator.missing_fields(&request.product).await?;

    Ok(Json(MissingFieldsResponse { missing_fields }))
}

#[tracing::instrument(skip(state, request))]
pub async fn generate_all(
    State(state): State<AppState>,
    Json(request): Json<ProductRequest>,
) -> Result<Json<AllContentResponse>, AppError> {
    request.validate()?;

    let content = state
        .generator
        .all(&request.product, &request.options())
        .await?;

    Ok(Json(AllContentResponse { content }))
}
