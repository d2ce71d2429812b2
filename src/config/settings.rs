use crate::config::ClientConfig;
use crate::utils::error::{MedicodeError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional `medicode.toml` settings file.
///
/// ```toml
/// [client]
/// base_url = "https://api.groq.com/openai/v1"
/// model = "llama-3.1-8b-instant"
///
/// [secrets]
/// file = ".streamlit/secrets.toml"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsFile {
    pub client: Option<ClientSection>,
    pub secrets: Option<SecretsSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientSection {
    pub base_url: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SecretsSection {
    pub file: Option<String>,
}

impl SettingsFile {
    /// 從 TOML 檔案載入設定
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| MedicodeError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| MedicodeError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${GROQ_BASE_URL})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| MedicodeError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn secrets_file(&self) -> Option<&str> {
        self.secrets.as_ref().and_then(|s| s.file.as_deref())
    }

    /// Overlays the values present in the file onto `config`.
    pub fn apply_to(&self, config: &mut ClientConfig) {
        if let Some(client) = &self.client {
            if let Some(base_url) = &client.base_url {
                config.base_url = base_url.clone();
            }
            if let Some(model) = &client.model {
                config.model = model.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_BASE_URL, DEFAULT_MODEL};
    use crate::utils::validation::Validate;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_settings() {
        let settings = SettingsFile::from_toml_str(
            r#"
[client]
model = "llama-3.3-70b-versatile"

[secrets]
file = "/etc/medicode/secrets.toml"
"#,
        )
        .unwrap();

        let mut config = ClientConfig::default();
        settings.apply_to(&mut config);

        assert_eq!(config.model, "llama-3.3-70b-versatile");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.secrets_file(), Some("/etc/medicode/secrets.toml"));
    }

    #[test]
    fn test_empty_settings_keep_defaults() {
        let settings = SettingsFile::from_toml_str("").unwrap();
        let mut config = ClientConfig::default();
        settings.apply_to(&mut config);

        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(settings.secrets_file(), None);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("MEDICODE_TEST_BASE_URL", "http://localhost:9999/v1");

        let settings = SettingsFile::from_toml_str(
            r#"
[client]
base_url = "${MEDICODE_TEST_BASE_URL}"
model = "${MEDICODE_TEST_UNSET_MODEL}"
"#,
        )
        .unwrap();
        let client = settings.client.unwrap();
        assert_eq!(client.base_url.as_deref(), Some("http://localhost:9999/v1"));
        assert_eq!(client.model.as_deref(), Some("${MEDICODE_TEST_UNSET_MODEL}"));

        std::env::remove_var("MEDICODE_TEST_BASE_URL");
    }

    #[test]
    fn test_invalid_url_fails_validation() {
        let settings = SettingsFile::from_toml_str(
            r#"
[client]
base_url = "invalid-url"
"#,
        )
        .unwrap();
        let mut config = ClientConfig::default();
        settings.apply_to(&mut config);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let err = SettingsFile::from_toml_str("[client\nmodel = 1").unwrap_err();
        assert!(matches!(err, MedicodeError::ConfigError { .. }));
    }

    #[test]
    fn test_settings_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[client]\nbase_url = \"https://example.com/openai/v1\"\n")
            .unwrap();

        let settings = SettingsFile::from_file(temp_file.path()).unwrap();
        let client = settings.client.unwrap();
        assert_eq!(client.base_url.as_deref(), Some("https://example.com/openai/v1"));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = SettingsFile::from_file("/nonexistent/medicode.toml").unwrap_err();
        assert!(matches!(err, MedicodeError::ConfigError { .. }));
    }
}
