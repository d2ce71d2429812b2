use crate::core::coder::{CodingClient, RemoteCallFailure};
use crate::core::composer::PromptComposer;
use crate::domain::model::CodeType;
use crate::domain::ports::CompletionBackend;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Blank note; nothing was sent.
    EmptyNote,
    /// The coding call failed, so enrichment was never attempted.
    Failed(RemoteCallFailure),
    Coded {
        codes: String,
        /// `None` when enrichment was not requested.
        enrichment: Option<Result<String, RemoteCallFailure>>,
    },
}

/// Runs one user submission: code the note, then optionally enrich.
pub struct CodingSession<B: CompletionBackend> {
    composer: PromptComposer,
    client: CodingClient<B>,
}

impl<B: CompletionBackend> CodingSession<B> {
    pub fn new(composer: PromptComposer, client: CodingClient<B>) -> Self {
        Self { composer, client }
    }

    pub async fn run(
        &self,
        selection: Option<CodeType>,
        note: &str,
        enrich: bool,
    ) -> SessionOutcome {
        if note.trim().is_empty() {
            tracing::warn!("⚠️ Empty clinical note, skipping request");
            return SessionOutcome::EmptyNote;
        }

        match selection {
            Some(code_type) => tracing::info!("🩺 Requesting {} codes", code_type),
            None => tracing::info!("🩺 Requesting ICD-10 and CPT codes"),
        }

        let request = self.composer.compose_for(selection, note);
        let codes = match self.client.submit(&request).await {
            Ok(codes) => codes,
            Err(failure) => return SessionOutcome::Failed(failure),
        };
        tracing::info!("✅ Codes received");

        let enrichment = if enrich {
            tracing::info!("📝 Requesting enriched clinical statement");
            let request = self.composer.compose_enrichment(note, &codes);
            let result = self.client.submit(&request).await;
            if result.is_ok() {
                tracing::info!("✅ Enriched statement received");
            }
            Some(result)
        } else {
            None
        };

        SessionOutcome::Coded { codes, enrichment }
    }
}
