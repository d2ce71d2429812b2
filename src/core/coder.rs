use crate::domain::model::CompletionRequest;
use crate::domain::ports::CompletionBackend;
use thiserror::Error;

/// The only failure a caller of [`CodingClient::submit`] ever sees.
///
/// Transport errors, authentication problems, provider-side errors and
/// malformed responses all collapse into this one kind; the message keeps
/// the underlying error text for display.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("API Error: {message}")]
pub struct RemoteCallFailure {
    pub message: String,
}

impl RemoteCallFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub struct CodingClient<B: CompletionBackend> {
    backend: B,
}

impl<B: CompletionBackend> CodingClient<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Issues exactly one completion call. Never retries.
    pub async fn submit(&self, request: &CompletionRequest) -> Result<String, RemoteCallFailure> {
        tracing::debug!(
            "Submitting completion request (model: {}, max_tokens: {})",
            request.model,
            request.max_tokens
        );

        match self.backend.complete(request).await {
            Ok(text) => {
                tracing::debug!("Completion returned {} chars", text.chars().count());
                Ok(text)
            }
            Err(e) => {
                let failure = RemoteCallFailure::new(e.to_string());
                tracing::error!("❌ {}", failure);
                tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
                Err(failure)
            }
        }
    }
}
