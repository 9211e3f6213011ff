//! Domain models for the content service.

pub mod content;
pub mod product;

pub use content::{
    AllContent, ContentType, GenerationOptions, MarketingCopy, MissingFields, Platform,
    SeoElements,
};
pub use product::{FieldValue, Product};
