//! HTTP handlers for the content service.

pub mod generate;
pub mod health;
pub mod metrics;

pub use generate::{
    generate_all, generate_description, generate_image_prompt, generate_marketing,
    generate_missing_fields, generate_seo,
};
pub use health::{health_check, readiness_check};
pub use metrics::metrics_endpoint;
