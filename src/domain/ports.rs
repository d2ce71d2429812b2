use crate::domain::model::CompletionRequest;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Process-wide client settings, resolved once at startup.
pub trait ClientSettings: Send + Sync {
    fn base_url(&self) -> &str;
    fn api_key(&self) -> Option<&str>;
}

/// A remote text-completion service.
///
/// Implementations issue exactly one call per `complete` and return the
/// first completion's text.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;
}
