//! Runtime configuration, resolved once at startup.
//!
//! Sources, highest priority first:
//! - process environment (after `.env` has been loaded by `dotenv`)
//! - an optional TOML file given with `--config` or `MATHPREP_CONFIG`
//! - built-in defaults
//!
//! A missing API key is not a startup error. Every generation action checks
//! for it and fails with [`GenerationError::MissingCredential`](crate::llm::GenerationError).

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com";

/// Environment names accepted for the API key, in lookup order.
pub const CREDENTIAL_VARS: [&str; 2] = ["API_KEY", "VITE_API_KEY"];
pub const CONFIG_PATH_VAR: &str = "MATHPREP_CONFIG";
pub const MODEL_VAR: &str = "MATHPREP_MODEL";
pub const API_URL_VAR: &str = "MATHPREP_API_URL";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// API credential. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Returns `None` for blank values so that `API_KEY=""` counts as unset.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// Values printed in the header of generated documents when the caller
/// does not pass them explicitly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentDefaults {
    #[serde(default)]
    pub teacher: Option<String>,
    #[serde(default)]
    pub school: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: Option<ApiKey>,
    pub model: String,
    pub api_url: String,
    pub document: DocumentDefaults,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            document: DocumentDefaults::default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    #[serde(default)]
    api: ApiSection,
    #[serde(default)]
    document: DocumentDefaults,
}

#[derive(Debug, Default, Deserialize)]
struct ApiSection {
    key: Option<String>,
    model: Option<String>,
    base_url: Option<String>,
}

impl FileConfig {
    fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl AppConfig {
    /// Loads `.env`, reads the optional config file and applies environment
    /// overrides. Call once and share the result.
    pub fn resolve(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        match dotenv::dotenv() {
            Ok(path) => debug!(path = %path.display(), "Loaded .env file"),
            Err(e) if e.not_found() => {}
            Err(e) => warn!(error = %e, "Ignoring unreadable .env file"),
        }

        let path = config_path
            .map(Path::to_path_buf)
            .or_else(|| env::var_os(CONFIG_PATH_VAR).map(PathBuf::from));

        let file = match path {
            Some(path) => {
                info!(path = %path.display(), "Reading config file");
                FileConfig::load(&path)?
            }
            None => FileConfig::default(),
        };

        let config = Self::from_sources(|name| env::var(name).ok(), file);
        if config.api_key.is_none() {
            warn!(
                "API key is missing. Set {} or {} in the environment.",
                CREDENTIAL_VARS[0], CREDENTIAL_VARS[1]
            );
        }
        Ok(config)
    }

    /// Same as [`AppConfig::resolve`] but with the file contents given
    /// directly. Only the environment lookup is consulted.
    pub fn from_toml<F>(lookup: F, raw: &str) -> Result<Self, toml::de::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file: FileConfig = toml::from_str(raw)?;
        Ok(Self::from_sources(lookup, file))
    }

    fn from_sources<F>(lookup: F, file: FileConfig) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = CREDENTIAL_VARS
            .iter()
            .find_map(|name| lookup(*name).and_then(ApiKey::new))
            .or_else(|| file.api.key.and_then(ApiKey::new));

        let model = lookup(MODEL_VAR)
            .filter(|v| !v.trim().is_empty())
            .or(file.api.model)
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let api_url = lookup(API_URL_VAR)
            .filter(|v| !v.trim().is_empty())
            .or(file.api.base_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self {
            api_key,
            model,
            api_url,
            document: file.document,
        }
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = ApiKey::new(key);
        self
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn api_key_prefers_first_name() {
        let config = AppConfig::from_sources(
            env_of(&[("API_KEY", "primary"), ("VITE_API_KEY", "secondary")]),
            FileConfig::default(),
        );
        assert_eq!(config.api_key.unwrap().expose(), "primary");
    }

    #[test]
    fn api_key_falls_back_to_vite_name() {
        let config = AppConfig::from_sources(
            env_of(&[("API_KEY", "  "), ("VITE_API_KEY", "secondary")]),
            FileConfig::default(),
        );
        assert_eq!(config.api_key.unwrap().expose(), "secondary");
    }

    #[test]
    fn missing_key_is_not_an_error() {
        let config = AppConfig::from_sources(env_of(&[]), FileConfig::default());
        assert!(!config.has_credential());
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn file_values_apply_under_env() {
        let raw = r#"
            [api]
            key = "from-file"
            model = "file-model"

            [document]
            teacher = "Ана Петровска"
        "#;
        let config = AppConfig::from_toml(env_of(&[(MODEL_VAR, "env-model")]), raw).unwrap();
        assert_eq!(config.api_key.unwrap().expose(), "from-file");
        assert_eq!(config.model, "env-model");
        assert_eq!(config.document.teacher.as_deref(), Some("Ана Петровска"));
        assert_eq!(config.document.school, None);
    }

    #[test]
    fn loads_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api]\nbase_url = \"http://127.0.0.1:9\"").unwrap();
        let loaded = FileConfig::load(file.path()).unwrap();
        assert_eq!(loaded.api.base_url.as_deref(), Some("http://127.0.0.1:9"));
    }

    #[test]
    fn bad_file_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api\nkey=").unwrap();
        let err = FileConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }

    #[test]
    fn debug_redacts_key() {
        let config = AppConfig::default().with_api_key("secret-value");
        let printed = format!("{:?}", config);
        assert!(!printed.contains("secret-value"));
        assert!(printed.contains("redacted"));
    }
}
