pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http::ChatCompletionsBackend;
pub use app::render::Renderer;
pub use config::ClientConfig;
pub use crate::core::{
    coder::{CodingClient, RemoteCallFailure},
    composer::PromptComposer,
    session::{CodingSession, SessionOutcome},
};
pub use domain::model::{CodeType, CompletionRequest};
pub use utils::error::{MedicodeError, Result};
