use super::{join, Prompt, LENGTH_LEGEND};
use crate::models::{ContentType, GenerationOptions, Product};

const UNNAMED_PRODUCT: &str = "Unnamed Product";

pub fn description_prompt(product: &Product, options: &GenerationOptions) -> Prompt {
    let name = product
        .name
        .as_ref()
        .map(|n| n.render())
        .unwrap_or_else(|| UNNAMED_PRODUCT.to_string());

    let text = format!(
        r#"You are an expert eCommerce copywriter specializing in creating compelling product descriptions.
Create a detailed, SEO-optimized product description for the following product:

Product Name: {name}
Brand: {brand}
Category: {category}
Subcategory: {subcategory}
Basic Description: {description}
Features: {features}
Materials: {materials}
Price: ${price}
Tags: {tags}

Requirements:
- Tone: {tone} (maintain the brand's voice)
- Length: {length} ({LENGTH_LEGEND})
- Style: {style}
- Highlight key benefits and unique selling points
- Include SEO-friendly keywords naturally
- Format with appropriate paragraphs and bullet points for readability
- Make the description compelling and conversion-focused

Respond with only the product description text."#,
        brand = product.brand(),
        category = product.category(),
        subcategory = product.subcategory(),
        description = product.basic_description(),
        features = join(&product.features()),
        materials = join(&product.materials()),
        price = product.price(),
        tags = join(&product.tags()),
        tone = options.tone,
        length = options.length,
        style = options.style,
    );

    Prompt {
        content_type: ContentType::Description,
        text,
        temperature: 0.7,
        max_tokens: 350,
    }
}
