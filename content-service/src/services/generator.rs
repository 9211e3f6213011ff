//! Content generation: prompt, completion call, post-processing.

use super::metrics;
use super::parsing::{parse_missing_fields, parse_seo};
use super::providers::{CompletionProvider, GenerationParams, ProviderError};
use super::retry::{retry_transient, RetryPolicy};
use crate::models::{
    AllContent, GenerationOptions, MarketingCopy, MissingFields, Platform, Product, SeoElements,
};
use crate::prompts::{self, Prompt, SYSTEM_PROMPT};
use std::sync::Arc;
use std::time::Instant;

/// Stateless facade over a completion provider. Cheap to clone.
#[derive(Clone)]
pub struct ContentGenerator {
    provider: Arc<dyn CompletionProvider>,
    retry: RetryPolicy,
}

impl ContentGenerator {
    pub fn new(provider: Arc<dyn CompletionProvider>, retry: RetryPolicy) -> Self {
        Self { provider, retry }
    }

    pub fn provider(&self) -> &Arc<dyn CompletionProvider> {
        &self.provider
    }

    /// Send one prompt and return the trimmed completion text.
    async fn run(&self, prompt: Prompt) -> Result<String, ProviderError> {
        let content_type = prompt.content_type;
        let params = GenerationParams {
            temperature: Some(prompt.temperature),
            max_tokens: Some(prompt.max_tokens),
        };
        let provider = self.provider.name();
        let model = self.provider.model().to_string();
        let start = Instant::now();

        let result = retry_transient(&self.retry, content_type.as_str(), || {
            self.provider.complete(SYSTEM_PROMPT, &prompt.text, &params)
        })
        .await;

        metrics::record_provider_latency(provider, &model, start.elapsed());

        match result {
            Ok(response) => {
                metrics::record_generation(content_type, "success");
                metrics::record_tokens(&model, response.input_tokens, response.output_tokens);

                tracing::info!(
                    content_type = %content_type,
                    provider = provider,
                    model = %model,
                    input_tokens = response.input_tokens,
                    output_tokens = response.output_tokens,
                    finish_reason = response.finish_reason.as_str(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    "Content generated"
                );

                Ok(response.text)
            }
            Err(e) => {
                metrics::record_generation(content_type, "error");
                metrics::record_provider_error(provider, e.kind());

                tracing::error!(
                    content_type = %content_type,
                    provider = provider,
                    model = %model,
                    error = %e,
                    "Content generation failed"
                );

                Err(e)
            }
        }
    }

    pub async fn description(
        &self,
        product: &Product,
        options: &GenerationOptions,
    ) -> Result<String, ProviderError> {
        self.run(prompts::description_prompt(product, options)).await
    }

    pub async fn seo(
        &self,
        product: &Product,
        options: &GenerationOptions,
    ) -> Result<SeoElements, ProviderError> {
        let reply = self.run(prompts::seo_prompt(product, options)).await?;
        Ok(parse_seo(&reply))
    }

    pub async fn marketing(
        &self,
        product: &Product,
        platform: &Platform,
        options: &GenerationOptions,
    ) -> Result<String, ProviderError> {
        self.run(prompts::marketing_prompt(product, platform, options))
            .await
    }

    pub async fn image_prompt(&self, product: &Product) -> Result<String, ProviderError> {
        self.run(prompts::image_prompt(product)).await
    }

    pub async fn missing_fields(&self, product: &Product) -> Result<MissingFields, ProviderError> {
        let reply = self.run(prompts::missing_fields_prompt(product)).await?;
        Ok(parse_missing_fields(&reply))
    }

    /// Every content type at once, with marketing copy for each known
    /// platform. Calls run concurrently; the first failure aborts the rest.
    pub async fn all(
        &self,
        product: &Product,
        options: &GenerationOptions,
    ) -> Result<AllContent, ProviderError> {
        let [email_platform, instagram_platform, facebook_platform] = Platform::ALL_KNOWN;

        let (description, seo, email, instagram, facebook, missing_fields, image_prompt) = tokio::try_join!(
            self.description(product, options),
            self.seo(product, options),
            self.marketing(product, &email_platform, options),
            self.marketing(product, &instagram_platform, options),
            self.marketing(product, &facebook_platform, options),
            self.missing_fields(product),
            self.image_prompt(product),
        )?;

        Ok(AllContent {
            description,
            seo,
            marketing: MarketingCopy {
                email,
                instagram,
                facebook,
            },
            missing_fields,
            image_prompt,
        })
    }
}
