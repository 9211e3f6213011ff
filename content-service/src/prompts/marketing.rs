use super::{join, Prompt, LENGTH_LEGEND};
use crate::models::{ContentType, GenerationOptions, Platform, Product};

const EMAIL_INSTRUCTIONS: &str = "Write a marketing email introducing this product.
Include:
- Attention-grabbing subject line
- Compelling opening paragraph
- Features and benefits section
- Clear call-to-action
- Professional closing";

const INSTAGRAM_INSTRUCTIONS: &str = "Write an Instagram caption to promote this product.
Include:
- Attention-grabbing opening line
- Benefits-focused copy
- Call-to-action
- 5-8 relevant hashtags
- Limit to 150-200 words";

const FACEBOOK_INSTRUCTIONS: &str = "Write a Facebook post promoting this product.
Include:
- Engaging opening that addresses the audience directly
- Value proposition and key benefits
- Social proof element (how others enjoy/benefit from it)
- Clear call-to-action
- Keep it conversational and friendly";

const GENERIC_INSTRUCTIONS: &str = "Write marketing copy for this product.";

pub fn platform_instructions(platform: &Platform) -> &'static str {
    match platform {
        Platform::Email => EMAIL_INSTRUCTIONS,
        Platform::Instagram => INSTAGRAM_INSTRUCTIONS,
        Platform::Facebook => FACEBOOK_INSTRUCTIONS,
        Platform::Other(_) => GENERIC_INSTRUCTIONS,
    }
}

pub fn marketing_prompt(
    product: &Product,
    platform: &Platform,
    options: &GenerationOptions,
) -> Prompt {
    let text = format!(
        r#"You are a marketing specialist for eCommerce brands. Write promotional content for:

Product Name: {name}
Brand: {brand}
Category: {category}
Description: {description}
Features: {features}
Price: ${price}
Tags: {tags}

{instructions}

Requirements:
- Tone: {tone}
- Length: {length} ({LENGTH_LEGEND})
- Style: {style}
- Focus on benefits rather than features
- Include a compelling call-to-action
- Match the writing style to the {platform} platform and audience expectations

Only respond with the {platform} marketing copy."#,
        name = product.name(),
        brand = product.brand(),
        category = product.category(),
        description = product.basic_description(),
        features = join(&product.features()),
        price = product.price(),
        tags = join(&product.tags()),
        instructions = platform_instructions(platform),
        tone = options.tone,
        length = options.length,
        style = options.style,
    );

    Prompt {
        content_type: ContentType::Marketing,
        text,
        temperature: 0.8,
        max_tokens: 400,
    }
}
