use super::{join, Prompt};
use crate::models::{ContentType, FieldValue, Product};

const MISSING: &str = "[MISSING]";

fn scalar_or_missing(field: &Option<FieldValue>) -> String {
    field
        .as_ref()
        .map(FieldValue::render)
        .unwrap_or_else(|| MISSING.to_string())
}

fn list_or_missing(field: &Option<FieldValue>) -> String {
    field
        .as_ref()
        .map(|f| join(&f.items()))
        .unwrap_or_else(|| MISSING.to_string())
}

pub fn missing_fields_prompt(product: &Product) -> Prompt {
    let text = format!(
        r#"You are an eCommerce product data specialist. Based on the available product information,
generate logical values for missing fields:

Product Name: {name}
Brand: {brand}
Price: {price}
Basic Description: {description}
Current Category: {category}
Current Subcategory: {subcategory}
Current Features: {features}
Current Materials: {materials}
Current Colors: {colors}
Current Tags: {tags}

For each missing field marked {MISSING}, provide logical values based on the available information.
Return in this JSON-compatible format:
Category: [single category]
Subcategory: [single subcategory]
Features: [list of 3-5 key features, comma-separated]
Materials: [list of materials, comma-separated]
Colors: [list of available colors, comma-separated]
Tags: [list of 5-8 relevant search tags, comma-separated]

Only include fields that are missing in the original data."#,
        name = product.name(),
        brand = product.brand(),
        price = product.price(),
        description = product.basic_description(),
        category = scalar_or_missing(&product.category),
        subcategory = scalar_or_missing(&product.subcategory),
        features = list_or_missing(&product.features),
        materials = list_or_missing(&product.materials),
        colors = list_or_missing(&product.colors),
        tags = list_or_missing(&product.tags),
    );

    Prompt {
        content_type: ContentType::MissingFields,
        text,
        temperature: 0.6,
        max_tokens: 300,
    }
}
