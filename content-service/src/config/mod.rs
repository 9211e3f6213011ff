use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::fmt;
use std::time::Duration;

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";
const DEFAULT_TIMEOUT_SECS: u64 = 60;
const DEFAULT_RETRY_MAX_ELAPSED_SECS: u64 = 10;
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000";

#[derive(Debug, Clone)]
pub struct ContentConfig {
    pub common: core_config::Config,
    pub environment: String,
    pub otlp_endpoint: Option<String>,
    pub openai: OpenAiConfig,
    pub cors: CorsConfig,
}

#[derive(Clone)]
pub struct OpenAiConfig {
    /// `None` outside production selects the in-process mock provider.
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
    /// Upper bound on time spent retrying transient upstream failures.
    /// Zero disables retries.
    pub retry_max_elapsed_secs: u64,
}

impl OpenAiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn retry_max_elapsed(&self) -> Duration {
        Duration::from_secs(self.retry_max_elapsed_secs)
    }
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            model: DEFAULT_OPENAI_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            retry_max_elapsed_secs: DEFAULT_RETRY_MAX_ELAPSED_SECS,
        }
    }
}

impl fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .field("retry_max_elapsed_secs", &self.retry_max_elapsed_secs)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: parse_origins(DEFAULT_CORS_ORIGINS),
        }
    }
}

impl ContentConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string());
        let is_prod = environment == "prod";

        let api_key = if is_prod {
            Some(get_env("OPENAI_API_KEY", None, is_prod)?)
        } else {
            env::var("OPENAI_API_KEY").ok().filter(|k| !k.trim().is_empty())
        };

        Ok(ContentConfig {
            common: common_config,
            environment,
            otlp_endpoint: env::var("OTLP_ENDPOINT").ok().filter(|e| !e.is_empty()),
            openai: OpenAiConfig {
                api_key,
                base_url: get_env("OPENAI_BASE_URL", Some(DEFAULT_OPENAI_BASE_URL), false)?,
                model: get_env("OPENAI_MODEL", Some(DEFAULT_OPENAI_MODEL), false)?,
                timeout_secs: parse_secs(
                    "OPENAI_TIMEOUT_SECS",
                    env::var("OPENAI_TIMEOUT_SECS").ok().as_deref(),
                    DEFAULT_TIMEOUT_SECS,
                    false,
                ),
                // Zero is meaningful here: it disables retries.
                retry_max_elapsed_secs: parse_secs(
                    "OPENAI_RETRY_MAX_ELAPSED_SECS",
                    env::var("OPENAI_RETRY_MAX_ELAPSED_SECS").ok().as_deref(),
                    DEFAULT_RETRY_MAX_ELAPSED_SECS,
                    true,
                ),
            },
            cors: CorsConfig {
                allowed_origins: parse_origins(&get_env(
                    "CORS_ALLOWED_ORIGINS",
                    Some(DEFAULT_CORS_ORIGINS),
                    is_prod,
                )?),
            },
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "prod"
    }
}

/// Split a comma-separated origin list, dropping blanks.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a whole number of seconds, falling back to `default` (with a
/// warning) when the value is unparseable, or zero and zero is not allowed.
fn parse_secs(key: &str, raw: Option<&str>, default: u64, allow_zero: bool) -> u64 {
    let Some(raw) = raw else {
        return default;
    };

    match raw.trim().parse::<u64>() {
        Ok(0) if !allow_zero => {
            tracing::warn!(key, default, "Zero is not a valid value, using default");
            default
        }
        Ok(secs) => secs,
        Err(e) => {
            tracing::warn!(key, value = raw, error = %e, default, "Invalid number of seconds, using default");
            default
        }
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
