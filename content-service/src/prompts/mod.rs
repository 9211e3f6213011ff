//! Prompt templates for each content type.
//!
//! Builders only interpolate product attributes into fixed wording; they
//! never fail and never call out.

mod description;
mod image;
mod marketing;
mod missing_fields;
mod seo;

pub use description::description_prompt;
pub use image::image_prompt;
pub use marketing::{marketing_prompt, platform_instructions};
pub use missing_fields::missing_fields_prompt;
pub use seo::seo_prompt;

use crate::models::ContentType;

/// System message sent with every completion request.
pub const SYSTEM_PROMPT: &str = "You are a helpful AI assistant for product content generation.";

/// Legend appended to every `Length:` requirement.
pub(crate) const LENGTH_LEGEND: &str = "short: 50-100 words, medium: 100-200 words, long: 200-300 words";

/// A rendered prompt plus the sampling settings for its content type.
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub content_type: ContentType,
    pub text: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

pub(crate) fn join(items: &[String]) -> String {
    items.join(", ")
}
