use crate::config::secrets::{self, DEFAULT_SECRETS_PATH};
use crate::config::settings::SettingsFile;
use crate::config::ClientConfig;
use crate::domain::model::CodeType;
use crate::utils::error::{MedicodeError, Result};
use crate::utils::validation::Validate;
use clap::Parser;
use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Clone, Parser)]
#[command(name = "medicode")]
#[command(about = "AI-powered medical coding for clinical notes")]
pub struct CliConfig {
    /// Clinical note text
    #[arg(long, conflicts_with = "note_file")]
    pub note: Option<String>,

    /// Read the clinical note from a file ("-" for stdin)
    #[arg(long)]
    pub note_file: Option<PathBuf>,

    /// Code system to request; both ICD-10 and CPT when omitted
    #[arg(long, value_enum)]
    pub code_type: Option<CodeType>,

    /// Also generate an enriched clinical statement
    #[arg(long)]
    pub enrich: bool,

    /// Settings file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Secrets file holding api_key
    #[arg(long)]
    pub secrets: Option<PathBuf>,

    /// Override the completion service base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Override the model identifier
    #[arg(long)]
    pub model: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

// Clinical notes never reach the logs; only their length does.
impl fmt::Debug for CliConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CliConfig")
            .field("note_chars", &self.note.as_ref().map(|n| n.chars().count()))
            .field("note_file", &self.note_file)
            .field("code_type", &self.code_type)
            .field("enrich", &self.enrich)
            .field("config", &self.config)
            .field("secrets", &self.secrets)
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("verbose", &self.verbose)
            .field("json_logs", &self.json_logs)
            .finish()
    }
}

impl CliConfig {
    /// Builds the client configuration: defaults, then the settings file,
    /// then command-line overrides. The API key is resolved here, once.
    pub fn client_config(&self) -> Result<ClientConfig> {
        let settings = match &self.config {
            Some(path) => SettingsFile::from_file(path)?,
            None => SettingsFile::default(),
        };

        let mut config = ClientConfig::default();
        settings.apply_to(&mut config);
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(model) = &self.model {
            config.model = model.clone();
        }

        let secrets_path = self
            .secrets
            .clone()
            .or_else(|| settings.secrets_file().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SECRETS_PATH));
        config.api_key = secrets::resolve_api_key(|name| std::env::var(name).ok(), &secrets_path)?;

        config.validate()?;
        Ok(config)
    }

    /// Returns the note from `--note`, `--note-file`, or stdin.
    pub fn read_note(&self) -> Result<String> {
        if let Some(note) = &self.note {
            return Ok(note.clone());
        }

        match self.note_file.as_deref() {
            Some(path) if path != Path::new("-") => Ok(std::fs::read_to_string(path)?),
            _ => {
                let mut note = String::new();
                std::io::stdin().read_to_string(&mut note)?;
                Ok(note)
            }
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.note.is_none() && self.note_file.is_none() {
            tracing::debug!("No --note or --note-file given, reading note from stdin");
        }
        if let Some(base_url) = &self.base_url {
            crate::utils::validation::validate_url("base_url", base_url)?;
        }
        if let Some(model) = &self.model {
            crate::utils::validation::validate_non_empty_string("model", model)?;
        }
        if let Some(path) = &self.config {
            if !path.exists() {
                return Err(MedicodeError::ConfigError {
                    message: format!("settings file {} not found", path.display()),
                });
            }
        }
        Ok(())
    }
}
