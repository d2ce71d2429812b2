use thiserror::Error;

#[derive(Error, Debug)]
pub enum MedicodeError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("No API key configured")]
    MissingCredentialError,

    #[error("Completion service returned {status}: {body}")]
    ApiStatusError { status: u16, body: String },

    #[error("Malformed completion response: {message}")]
    MalformedResponseError { message: String },
}

impl MedicodeError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            MedicodeError::ConfigError { message } => {
                format!("Configuration problem: {}", message)
            }
            MedicodeError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            MedicodeError::MissingCredentialError => {
                "No API key is available for the completion service".to_string()
            }
            MedicodeError::IoError(e) => format!("Could not read input: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MedicodeError::ConfigError { .. } => {
                "Check that the settings file exists and is valid TOML"
            }
            MedicodeError::InvalidConfigValueError { .. } => {
                "Fix the value in the settings file or on the command line"
            }
            MedicodeError::MissingCredentialError => {
                "Set MEDICODE_API_KEY or add api_key to the secrets file"
            }
            MedicodeError::IoError(_) => "Check the note file path and permissions",
            MedicodeError::HttpError(_) => "Check network connectivity and the base URL",
            MedicodeError::ApiStatusError { status, .. } if *status == 401 || *status == 403 => {
                "Check that the API key is valid"
            }
            _ => "Try again later or run with --verbose for details",
        }
    }
}

pub type Result<T> = std::result::Result<T, MedicodeError>;
