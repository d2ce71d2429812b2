use crate::utils::error::{MedicodeError, Result};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_SECRETS_PATH: &str = ".streamlit/secrets.toml";
pub const API_KEY_ENV_VARS: [&str; 2] = ["MEDICODE_API_KEY", "GROQ_API_KEY"];

#[derive(Debug, Deserialize)]
struct SecretsFile {
    api_key: Option<String>,
}

/// Reads `api_key` from a secrets TOML file. A missing file yields `None`.
pub fn read_secrets_file<P: AsRef<Path>>(path: P) -> Result<Option<String>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path)?;
    let secrets: SecretsFile = toml::from_str(&content).map_err(|e| MedicodeError::ConfigError {
        message: format!("cannot parse secrets file {}: {}", path.display(), e),
    })?;

    Ok(secrets.api_key.filter(|key| !key.trim().is_empty()))
}

/// Resolves the API key once at startup: environment first, then the
/// secrets file.
pub fn resolve_api_key<F>(env_lookup: F, secrets_path: &Path) -> Result<Option<String>>
where
    F: Fn(&str) -> Option<String>,
{
    for var in API_KEY_ENV_VARS {
        if let Some(key) = env_lookup(var).filter(|key| !key.trim().is_empty()) {
            tracing::debug!("API key taken from {}", var);
            return Ok(Some(key));
        }
    }

    let key = read_secrets_file(secrets_path)?;
    match &key {
        Some(_) => tracing::debug!("API key taken from {}", secrets_path.display()),
        None => tracing::warn!(
            "⚠️ No API key found (set {} or api_key in {}); requests will fail",
            API_KEY_ENV_VARS[0],
            secrets_path.display()
        ),
    }
    Ok(key)
}
