use crate::config::DEFAULT_MODEL;
use crate::core::prompts;
use crate::domain::model::{CodeType, CompletionRequest};

pub const MAX_INSTRUCTION_CHARS: usize = 500;
pub const MAX_NOTE_CHARS: usize = 2000;
pub const MAX_OUTPUT_TOKENS: u32 = 1000;

/// Keeps at most `max_chars` characters of `text`. Counts Unicode scalar
/// values, so a multi-byte character is never split.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Builds chat-completion requests from a code selection and a note.
#[derive(Debug, Clone)]
pub struct PromptComposer {
    model: String,
}

impl PromptComposer {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
        }
    }

    pub fn compose(&self, code_type: CodeType, note: &str) -> CompletionRequest {
        self.build(prompts::instruction_for(code_type), note)
    }

    pub fn compose_general(&self, note: &str) -> CompletionRequest {
        self.build(prompts::GENERAL_INSTRUCTION, note)
    }

    pub fn compose_for(&self, selection: Option<CodeType>, note: &str) -> CompletionRequest {
        match selection {
            Some(code_type) => self.compose(code_type, note),
            None => self.compose_general(note),
        }
    }

    pub fn compose_enrichment(&self, note: &str, prior_result: &str) -> CompletionRequest {
        let instruction = prompts::enrichment_instruction(note, prior_result);
        self.build(&instruction, note)
    }

    fn build(&self, instruction: &str, note: &str) -> CompletionRequest {
        let instruction = truncate_chars(instruction, MAX_INSTRUCTION_CHARS);
        let note = truncate_chars(note, MAX_NOTE_CHARS);
        tracing::debug!(
            "Composed request: instruction {} chars, note {} chars",
            instruction.chars().count(),
            note.chars().count()
        );
        CompletionRequest::new(self.model.clone(), instruction, note, MAX_OUTPUT_TOKENS)
    }
}

impl Default for PromptComposer {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL)
    }
}
