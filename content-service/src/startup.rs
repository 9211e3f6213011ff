//! Application startup and lifecycle management.

use crate::config::ContentConfig;
use crate::handlers;
use crate::services::providers::mock::MockCompletionProvider;
use crate::services::providers::openai::{OpenAiProvider, OpenAiProviderConfig};
use crate::services::{CompletionProvider, ContentGenerator, RetryPolicy};
use axum::{
    body::Body,
    http::{header, HeaderValue, Method},
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    metrics::metrics_middleware,
    tracing::{make_request_span, request_id_middleware},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ContentConfig,
    pub generator: ContentGenerator,
}

impl AppState {
    pub fn new(config: ContentConfig, provider: Arc<dyn CompletionProvider>) -> Self {
        let retry = RetryPolicy::with_max_elapsed(config.openai.retry_max_elapsed());
        Self {
            config,
            generator: ContentGenerator::new(provider, retry),
        }
    }
}

/// Pick the completion backend: OpenAI when a key is configured, otherwise
/// the mock (never in production).
pub fn build_provider(config: &ContentConfig) -> Result<Arc<dyn CompletionProvider>, AppError> {
    match &config.openai.api_key {
        Some(api_key) => {
            let provider = OpenAiProvider::new(OpenAiProviderConfig {
                api_key: api_key.clone(),
                base_url: config.openai.base_url.clone(),
                model: config.openai.model.clone(),
                timeout: config.openai.timeout(),
            })
            .map_err(|e| AppError::ConfigError(anyhow::anyhow!(e)))?;

            tracing::info!(
                model = %config.openai.model,
                base_url = %config.openai.base_url,
                "Initialized OpenAI completion provider"
            );
            Ok(Arc::new(provider))
        }
        None if config.is_production() => Err(AppError::ConfigError(anyhow::anyhow!(
            "OPENAI_API_KEY is required in production"
        ))),
        None => {
            tracing::warn!("OPENAI_API_KEY not set, using mock completion provider");
            Ok(Arc::new(MockCompletionProvider::new(true)))
        }
    }
}

fn cors_layer(config: &ContentConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors
        .allowed_origins
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!("Invalid CORS origin '{}': {}. Skipping.", o, e);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// Build the HTTP router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        .route(
            "/generate/description",
            post(handlers::generate_description),
        )
        .route("/generate/seo", post(handlers::generate_seo))
        .route("/generate/marketing", post(handlers::generate_marketing))
        .route(
            "/generate/image-prompt",
            post(handlers::generate_image_prompt),
        )
        .route(
            "/generate/missing-fields",
            post(handlers::generate_missing_fields),
        )
        .route("/generate/all", post(handlers::generate_all))
        .route_layer(from_fn(metrics_middleware))
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics_endpoint))
        .with_state(state)
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span::<Body>))
        .layer(from_fn(request_id_middleware))
        .layer(cors)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the provider chosen from configuration.
    pub async fn build(config: ContentConfig) -> Result<Self, AppError> {
        let provider = build_provider(&config)?;
        Self::build_with_provider(config, provider).await
    }

    /// Build the application around an explicit provider.
    pub async fn build_with_provider(
        config: ContentConfig,
        provider: Arc<dyn CompletionProvider>,
    ) -> Result<Self, AppError> {
        // Port 0 = random port for testing
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        let router = build_router(AppState::new(config, provider));

        tracing::info!("Content service listening on port {}", port);

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve until Ctrl+C or SIGTERM.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}
