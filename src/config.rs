use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{AppError, AppResult};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct StorageConfig {
    /// Maximum number of accepted registrations kept; 0 means unlimited
    #[serde(default)]
    pub max_users: usize,
}

lazy_static! {
    static ref ENV_VAR: Regex =
        Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}").unwrap();
}

impl AppConfig {
    /// Load configuration from YAML file
    pub fn load_from_file<P: AsRef<Path>>(config_path: P) -> AppResult<Self> {
        let path = config_path.as_ref();

        if !path.exists() {
            return Err(AppError::Configuration(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Configuration(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let expanded_content = Self::expand_env_vars(&content)?;

        let app_config: AppConfig = serde_yaml::from_str(&expanded_content).map_err(|e| {
            AppError::Configuration(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;

        if app_config.server.host.trim().is_empty() {
            return Err(AppError::Configuration(
                "Configuration must specify a server host".to_string(),
            ));
        }

        Ok(app_config)
    }

    /// Local-only server with an unbounded in-memory user list
    pub fn default_config() -> Self {
        AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            storage: StorageConfig::default(),
        }
    }

    /// Expand environment variables in format ${VAR_NAME} or ${VAR_NAME:-default}
    fn expand_env_vars(content: &str) -> AppResult<String> {
        let mut missing = None;

        let expanded = ENV_VAR.replace_all(content, |caps: &Captures| {
            let name = &caps[1];
            match (std::env::var(name), caps.get(2)) {
                (Ok(value), _) => value,
                (Err(_), Some(default)) => default.as_str().to_string(),
                (Err(_), None) => {
                    missing.get_or_insert_with(|| name.to_string());
                    String::new()
                }
            }
        });

        match missing {
            Some(name) => Err(AppError::Configuration(format!(
                "Environment variable {} not found and no default provided",
                name
            ))),
            None => Ok(expanded.into_owned()),
        }
    }
}
