use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::product::FieldValue;

pub const DEFAULT_TONE: &str = "default";
pub const DEFAULT_LENGTH: &str = "medium";
pub const DEFAULT_STYLE: &str = "standard";

/// Voice controls shared by the copywriting prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOptions {
    pub tone: String,
    pub length: String,
    pub style: String,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            tone: DEFAULT_TONE.to_string(),
            length: DEFAULT_LENGTH.to_string(),
            style: DEFAULT_STYLE.to_string(),
        }
    }
}

/// Target channel for marketing copy. Unrecognised names are kept verbatim
/// and get generic instructions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Platform {
    #[default]
    Email,
    Instagram,
    Facebook,
    Other(String),
}

impl Platform {
    pub const ALL_KNOWN: [Platform; 3] = [Platform::Email, Platform::Instagram, Platform::Facebook];

    pub fn as_str(&self) -> &str {
        match self {
            Platform::Email => "email",
            Platform::Instagram => "instagram",
            Platform::Facebook => "facebook",
            Platform::Other(name) => name,
        }
    }
}

impl From<String> for Platform {
    fn from(value: String) -> Self {
        match value.as_str() {
            "email" => Platform::Email,
            "instagram" => Platform::Instagram,
            "facebook" => Platform::Facebook,
            _ => Platform::Other(value),
        }
    }
}

impl From<&str> for Platform {
    fn from(value: &str) -> Self {
        Platform::from(value.to_string())
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of generated content; used for logging and metric labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Description,
    Seo,
    Marketing,
    ImagePrompt,
    MissingFields,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Description => "description",
            ContentType::Seo => "seo",
            ContentType::Marketing => "marketing",
            ContentType::ImagePrompt => "image_prompt",
            ContentType::MissingFields => "missing_fields",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Search metadata parsed from the model reply. A key is present only when
/// the reply contained the matching line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoElements {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Suggested values for product fields, keyed by lower-cased field name.
pub type MissingFields = BTreeMap<String, FieldValue>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketingCopy {
    pub email: String,
    pub instagram: String,
    pub facebook: String,
}

/// Every content type for one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllContent {
    pub description: String,
    pub seo: SeoElements,
    pub marketing: MarketingCopy,
    pub missing_fields: MissingFields,
    pub image_prompt: String,
}
