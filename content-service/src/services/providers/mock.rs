//! In-process provider for local development and tests.

use super::{CompletionProvider, FinishReason, GenerationParams, ProviderError, ProviderResponse};
use async_trait::async_trait;
use std::sync::Mutex;

type Responder = Box<dyn Fn(&str) -> Result<String, ProviderError> + Send + Sync>;

/// One `complete` call as the mock received it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub system: String,
    pub prompt: String,
    pub params: GenerationParams,
}

/// Mock completion provider. Echoes the first prompt line unless given a
/// responder, and records every call it receives.
pub struct MockCompletionProvider {
    enabled: bool,
    responder: Option<Responder>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockCompletionProvider {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            responder: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Answer each prompt with `responder(prompt)`.
    pub fn with_responder<F>(responder: F) -> Self
    where
        F: Fn(&str) -> Result<String, ProviderError> + Send + Sync + 'static,
    {
        Self {
            enabled: true,
            responder: Some(Box::new(responder)),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Calls received so far, in arrival order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Prompts received so far, in arrival order.
    pub fn prompts(&self) -> Vec<String> {
        self.calls().into_iter().map(|call| call.prompt).collect()
    }
}

#[async_trait]
impl CompletionProvider for MockCompletionProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn model(&self) -> &str {
        "mock"
    }

    async fn complete(
        &self,
        system: &str,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError> {
        if !self.enabled {
            return Err(ProviderError::NotConfigured(
                "Mock completion provider not enabled".to_string(),
            ));
        }

        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(RecordedCall {
                system: system.to_string(),
                prompt: prompt.to_string(),
                params: params.clone(),
            });

        let text = match &self.responder {
            Some(responder) => responder(prompt)?,
            None => format!(
                "Mock response for: {}",
                prompt.lines().next().unwrap_or_default()
            ),
        };

        Ok(ProviderResponse {
            text: text.trim().to_string(),
            input_tokens: prompt.len() as u32 / 4,
            output_tokens: 10,
            finish_reason: FinishReason::Complete,
        })
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        if self.enabled {
            Ok(())
        } else {
            Err(ProviderError::NotConfigured(
                "Mock completion provider not enabled".to_string(),
            ))
        }
    }
}
