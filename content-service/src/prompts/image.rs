use super::{join, Prompt};
use crate::models::{ContentType, Product};

pub fn image_prompt(product: &Product) -> Prompt {
    let text = format!(
        r#"You are a product photographer and image generation expert. Create a detailed DALL-E prompt
to generate a high-quality, professional product image for:

Product: {name}
Brand: {brand}
Category: {category}
Subcategory: {subcategory}
Basic Description: {description}
Materials: {materials}
Colors: {colors}
Key Features: {features}

Your DALL-E prompt should:
1. Describe the product with vivid, specific visual details
2. Specify the style (professional product photography)
3. Include lighting details (soft, natural lighting)
4. Describe the background (minimal, contextually appropriate)
5. Include angle and perspective
6. Mention high resolution and photorealistic quality
7. Be under 200 characters for optimal DALL-E processing

Respond with ONLY the DALL-E prompt text (no explanations)."#,
        name = product.name(),
        brand = product.brand(),
        category = product.category(),
        subcategory = product.subcategory(),
        description = product.basic_description(),
        materials = join(&product.materials()),
        colors = join(&product.colors()),
        features = join(&product.features()),
    );

    Prompt {
        content_type: ContentType::ImagePrompt,
        text,
        temperature: 0.7,
        max_tokens: 200,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_visual_attributes() {
        let product = Product {
            name: Some("Desk Lamp".into()),
            colors: Some(vec!["Matte black", "Brass"].into()),
            materials: Some(vec!["Aluminium"].into()),
            ..Default::default()
        };

        let prompt = image_prompt(&product);

        assert!(prompt.text.contains("Product: Desk Lamp\n"));
        assert!(prompt.text.contains("Colors: Matte black, Brass\n"));
        assert!(prompt.text.contains("Materials: Aluminium\n"));
        assert!(prompt.text.contains("7. Be under 200 characters"));
        assert_eq!(prompt.content_type, ContentType::ImagePrompt);
        assert_eq!(prompt.max_tokens, 200);
    }
}
