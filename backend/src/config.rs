use serde::{Deserialize, Serialize};
use serde_yaml;
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub analysis: AnalysisConfig,
    pub fetch: FetchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8081,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranslationMode {
    /// One provider request per label name.
    PerLabel,
    /// Names joined into a single request and split back on the target separator.
    Joined,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub confidence_threshold: f64,
    pub source_language: String,
    pub target_language: String,
    pub translation_mode: TranslationMode,
    pub join_separator: String,
    pub split_separator: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: 80.0,
            source_language: "en".to_string(),
            target_language: "pt".to_string(),
            translation_mode: TranslationMode::PerLabel,
            join_separator: " and ".to_string(),
            split_separator: " e ".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyEncoding {
    Base64,
    Raw,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub body_encoding: BodyEncoding,
    pub timeout_secs: Option<u64>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            body_encoding: BodyEncoding::Base64,
            timeout_secs: None,
        }
    }
}

impl AppConfig {
    /// Loads `ANALYSIS_CONFIG` (or `config/analysis.yaml` next to the workspace),
    /// falling back to defaults when the file does not exist, then applies
    /// environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        let mut config = if path.exists() {
            Self::from_file(&path)?
        } else {
            log::warn!(
                "Config file {} not found, using defaults",
                path.display()
            );
            Self::default()
        };
        config.apply_env_overrides(|key| env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let config_str = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&config_str)
    }

    pub fn from_yaml(config_str: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_yaml::from_str(config_str)?;
        Ok(config)
    }

    fn config_path() -> PathBuf {
        if let Ok(path) = env::var("ANALYSIS_CONFIG") {
            return PathBuf::from(path);
        }
        match env::var("CARGO_MANIFEST_DIR") {
            Ok(manifest_dir) => PathBuf::from(format!("{}/../config/analysis.yaml", manifest_dir)),
            Err(_) => PathBuf::from("config/analysis.yaml"),
        }
    }

    /// `HOST` and `PORT` override the server section.
    fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| ConfigError::InvalidValue(format!("PORT={}", port)))?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let analysis = &self.analysis;
        if !(0.0..=100.0).contains(&analysis.confidence_threshold) {
            return Err(ConfigError::InvalidValue(format!(
                "confidence_threshold must be within 0-100, got {}",
                analysis.confidence_threshold
            )));
        }
        if analysis.source_language.trim().is_empty() || analysis.target_language.trim().is_empty()
        {
            return Err(ConfigError::InvalidValue(
                "language codes must not be empty".to_string(),
            ));
        }
        if analysis.join_separator.is_empty() || analysis.split_separator.is_empty() {
            return Err(ConfigError::InvalidValue(
                "separators must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
