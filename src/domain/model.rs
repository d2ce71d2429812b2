use serde::{Deserialize, Serialize};
use std::fmt;

/// Which code system a request asks the model for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum CodeType {
    #[cfg_attr(feature = "cli", value(name = "icd10", alias = "icd-10", alias = "ICD-10"))]
    Icd10,
    #[cfg_attr(feature = "cli", value(name = "cpt", alias = "CPT"))]
    Cpt,
}

impl CodeType {
    pub fn label(&self) -> &'static str {
        match self {
            CodeType::Icd10 => "ICD-10",
            CodeType::Cpt => "CPT",
        }
    }
}

impl fmt::Display for CodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// The full payload for one chat-completion call.
///
/// Serialises directly to the request body of an OpenAI-compatible
/// `/chat/completions` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
}

impl CompletionRequest {
    pub fn new(model: impl Into<String>, instruction: &str, note: &str, max_tokens: u32) -> Self {
        Self {
            model: model.into(),
            messages: vec![
                ChatMessage {
                    role: Role::System,
                    content: instruction.to_string(),
                },
                ChatMessage {
                    role: Role::User,
                    content: note.to_string(),
                },
            ],
            max_tokens,
        }
    }

    pub fn instruction(&self) -> &str {
        self.content_for(Role::System)
    }

    pub fn note(&self) -> &str {
        self.content_for(Role::User)
    }

    fn content_for(&self, role: Role) -> &str {
        self.messages
            .iter()
            .find(|m| m.role == role)
            .map(|m| m.content.as_str())
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompletionChoice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl CompletionResponse {
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
    }
}
