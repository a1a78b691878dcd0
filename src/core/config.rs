//! Client configuration
//!
//! Defaults point at the production back office; a per-user YAML file and
//! environment variables override them. Missing or unreadable config is not
//! an error, the defaults simply apply.

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

const DEFAULT_BASE_URL: &str = "https://app.efox.com.np/api";
const DEFAULT_SERVICE_URL: &str = "erp.com.np";

/// Resolved client configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the REST API, without a trailing slash
    pub base_url: String,
    /// Tenant identifier sent with the token exchange
    pub service_url: String,
}

/// On-disk shape; everything optional so a partial file is fine
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    base_url: Option<String>,
    service_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            service_url: DEFAULT_SERVICE_URL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration: defaults, then the config file, then environment.
    pub fn load() -> Self {
        let mut config = Config::default();

        if let Some(path) = Self::config_file_path() {
            if let Ok(content) = fs::read_to_string(&path) {
                match serde_yml::from_str::<ConfigFile>(&content) {
                    Ok(file) => {
                        if let Some(base_url) = file.base_url {
                            config.base_url = base_url;
                        }
                        if let Some(service_url) = file.service_url {
                            config.service_url = service_url;
                        }
                    }
                    Err(e) => {
                        eprintln!("Warning: ignoring malformed {}: {}", path.display(), e);
                    }
                }
            }
        }

        if let Ok(base_url) = std::env::var("SCHOOLCTL_BASE_URL") {
            if !base_url.is_empty() {
                config.base_url = base_url;
            }
        }
        if let Ok(service_url) = std::env::var("SCHOOLCTL_SERVICE_URL") {
            if !service_url.is_empty() {
                config.service_url = service_url;
            }
        }

        config.base_url = config.base_url.trim_end_matches('/').to_string();
        config
    }

    /// Per-user config directory (e.g. `~/.config/schoolctl` on Linux)
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("np", "efox", "schoolctl")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    fn config_file_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.yaml"))
    }

    /// Join an API path onto the base URL
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = Config::default();
        assert!(config.base_url.starts_with("https://"));
        assert!(!config.base_url.ends_with('/'));
    }

    #[test]
    fn url_joins_without_double_slashes() {
        let config = Config {
            base_url: "https://example.test/api".to_string(),
            service_url: "erp.test".to_string(),
        };
        assert_eq!(
            config.url("/v1/Students/list"),
            "https://example.test/api/v1/Students/list"
        );
        assert_eq!(
            config.url("v1/Export/export-sample"),
            "https://example.test/api/v1/Export/export-sample"
        );
    }

    #[test]
    fn partial_config_file_parses() {
        let file: ConfigFile = serde_yml::from_str("base_url: https://staging.test/api\n").unwrap();
        assert_eq!(file.base_url.as_deref(), Some("https://staging.test/api"));
        assert_eq!(file.service_url, None);
    }
}
