pub mod generator;
pub mod metrics;
pub mod parsing;
pub mod providers;
pub mod retry;

pub use generator::ContentGenerator;
pub use providers::{CompletionProvider, ProviderError};
pub use retry::RetryPolicy;
