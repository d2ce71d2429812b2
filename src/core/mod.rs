pub mod coder;
pub mod composer;
pub mod prompts;
pub mod session;

pub use crate::domain::model::{CodeType, CompletionRequest};
pub use crate::domain::ports::{ClientSettings, CompletionBackend};
pub use crate::utils::error::Result;
