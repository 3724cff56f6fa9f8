//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use finder_interpreter::InterpreterConfig;
use finder_llm::ollama::{DEFAULT_ENDPOINT, DEFAULT_MAX_RETRIES, DEFAULT_MODEL};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Where products and categories come from
    #[serde(default)]
    pub catalog: CatalogSettings,

    /// Which agent interprets queries
    #[serde(default)]
    pub llm: LlmSettings,

    /// Interpreter limits
    #[serde(default)]
    pub interpreter: InterpreterConfig,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Catalog sources. The bundled sample catalog is used when unset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// Product list (JSON array)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub products_path: Option<PathBuf>,

    /// Category table (TOML)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories_path: Option<PathBuf>,
}

/// Agent selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    /// Provider kind
    #[serde(default)]
    pub provider: ProviderKind,

    /// Ollama endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model name
    #[serde(default = "default_model")]
    pub model: String,

    /// Retries per request
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Fixed reply used by the mock provider
    #[serde(default = "default_mock_response")]
    pub mock_response: String,
}

/// Supported providers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Local Ollama server
    #[default]
    Ollama,
    /// Canned reply, no network
    Mock,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Command history size
    #[serde(default = "default_history_size")]
    pub history_size: usize,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// One block per product
    Cards,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".finder").join("config.toml"))
    }

    /// The explicit path if given, otherwise the default one.
    pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf> {
        match explicit {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::default_path(),
        }
    }

    /// Load configuration from a file, or defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Serialize as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        self.interpreter
            .validate()
            .map_err(|e| CliError::Config(e.to_string()))?;
        if self.llm.max_retries == 0 {
            return Err(CliError::Config("llm.max_retries must be at least 1".into()));
        }
        Ok(())
    }
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            provider: ProviderKind::default(),
            endpoint: default_endpoint(),
            model: default_model(),
            max_retries: default_max_retries(),
            mock_response: default_mock_response(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            history_size: 1000,
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_max_retries() -> u32 {
    DEFAULT_MAX_RETRIES
}

fn default_mock_response() -> String {
    r#"{"category": null, "max_price": null, "min_price": null}"#.to_string()
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_history_size() -> usize {
    1000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.llm.provider, ProviderKind::Ollama);
        assert_eq!(config.llm.endpoint, DEFAULT_ENDPOINT);
        assert!(config.catalog.products_path.is_none());
        assert!(config.settings.color);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [llm]
            provider = "mock"

            [settings]
            format = "cards"
            "#,
        )
        .unwrap();
        assert_eq!(config.llm.provider, ProviderKind::Mock);
        assert_eq!(config.llm.model, DEFAULT_MODEL);
        assert_eq!(config.settings.format, OutputFormat::Cards);
        assert_eq!(config.settings.history_size, 1000);
        assert_eq!(config.interpreter, InterpreterConfig::default());
    }

    #[test]
    fn test_unknown_provider_rejected() {
        let result: std::result::Result<Config, _> = toml::from_str("[llm]\nprovider = \"gpt\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_zero_retries() {
        let mut config = Config::default();
        config.llm.max_retries = 0;
        assert!(matches!(config.validate(), Err(CliError::Config(_))));
    }

    #[test]
    fn test_resolve_explicit_path() {
        let path = Config::resolve_path(Some(Path::new("/tmp/finder.toml"))).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/finder.toml"));
    }
}
