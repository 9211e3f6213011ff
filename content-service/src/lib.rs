//! content-service: generated product copy (descriptions, SEO metadata,
//! marketing copy, image prompts) backed by a hosted chat-completion model.

pub mod config;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod services;
pub mod startup;
