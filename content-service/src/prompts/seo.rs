use super::{join, Prompt};
use crate::models::{ContentType, GenerationOptions, Product};

/// Only the leading features make it into search metadata.
const SEO_FEATURE_LIMIT: usize = 3;

pub fn seo_prompt(product: &Product, options: &GenerationOptions) -> Prompt {
    let features: Vec<String> = product
        .features()
        .into_iter()
        .take(SEO_FEATURE_LIMIT)
        .collect();

    let text = format!(
        r#"You are an SEO expert for eCommerce websites. Generate optimized title and meta description for:

Product Name: {name}
Brand: {brand}
Category: {category}
Basic Description: {description}
Key Features: {features}
Tags: {tags}

Requirements:
- Tone: {tone}
- Style: {style}
- Title must be under 60 characters and include the product name and brand
- Meta description must be under 160 characters
- Include primary keywords naturally
- Make them compelling and click-worthy in search results
- Focus on benefits and value proposition

Respond in this format:
Title: ...
Meta Description: ..."#,
        name = product.name(),
        brand = product.brand(),
        category = product.category(),
        description = product.basic_description(),
        features = join(&features),
        tags = join(&product.tags()),
        tone = options.tone,
        style = options.style,
    );

    Prompt {
        content_type: ContentType::Seo,
        text,
        temperature: 0.6,
        max_tokens: 200,
    }
}
