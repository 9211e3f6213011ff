#![allow(dead_code)]

use content_service::config::{ContentConfig, CorsConfig, OpenAiConfig};
use content_service::services::providers::mock::MockCompletionProvider;
use content_service::services::CompletionProvider;
use content_service::startup::Application;
use service_core::config::Config as CoreConfig;
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub provider: Arc<MockCompletionProvider>,
    pub client: reqwest::Client,
}

pub fn test_config() -> ContentConfig {
    ContentConfig {
        // Port 0 = random port
        common: CoreConfig {
            port: 0,
            log_level: "debug".to_string(),
        },
        environment: "test".to_string(),
        otlp_endpoint: None,
        openai: OpenAiConfig {
            retry_max_elapsed_secs: 0,
            ..Default::default()
        },
        cors: CorsConfig::default(),
    }
}

impl TestApp {
    /// Spawn with the echoing mock provider.
    pub async fn spawn() -> Self {
        Self::spawn_with(MockCompletionProvider::new(true)).await
    }

    pub async fn spawn_with(provider: MockCompletionProvider) -> Self {
        service_core::observability::init_metrics();

        let provider = Arc::new(provider);
        let app = Application::build_with_provider(
            test_config(),
            provider.clone() as Arc<dyn CompletionProvider>,
        )
        .await
        .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            provider,
            client,
        }
    }

    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}{}", self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }
}
