//! Run configuration.
//!
//! Defaults reproduce the stock run. An optional `wordfreq.ron` in the working
//! directory overrides any subset of the fields.

use std::fs;
use std::path::Path;

use anyhow::{ensure, Context};
use serde::{Deserialize, Serialize};
use wordfreq_core::DEFAULT_WORKERS;
use wordfreq_engine::{EngineConfig, FetchSettings};
use wordfreq_logging::wf_info;

pub const CONFIG_FILENAME: &str = "wordfreq.ron";
pub const DEFAULT_URL: &str = "https://en.wikipedia.org/wiki/Fairy_Tail";
pub const DEFAULT_TOP_N: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub url: String,
    pub workers: usize,
    pub top_n: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            workers: DEFAULT_WORKERS,
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl AppConfig {
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            fetch: FetchSettings::default(),
            workers: self.workers,
        }
    }

    fn validate(self) -> anyhow::Result<Self> {
        url::Url::parse(&self.url).with_context(|| format!("invalid url {:?}", self.url))?;
        ensure!(self.workers >= 1, "workers must be at least 1");
        Ok(self)
    }
}

/// Loads `path` if it exists, otherwise returns the defaults.
pub fn load(path: &Path) -> anyhow::Result<AppConfig> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return AppConfig::default().validate();
        }
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read {}", path.display()));
        }
    };

    let config: AppConfig =
        ron::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
    wf_info!("Loaded configuration from {:?}", path);
    config.validate()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::{load, AppConfig, CONFIG_FILENAME, DEFAULT_URL};

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load(&dir.path().join(CONFIG_FILENAME)).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.url, DEFAULT_URL);
        assert_eq!(config.workers, 4);
        assert_eq!(config.top_n, 10);
    }

    #[test]
    fn file_overrides_selected_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "(workers: 8, top_n: 25)").unwrap();

        let config = load(&path).unwrap();
        assert_eq!(config.url, DEFAULT_URL);
        assert_eq!(config.workers, 8);
        assert_eq!(config.top_n, 25);
        assert_eq!(config.engine_config().workers, 8);
    }

    #[test]
    fn zero_workers_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "(workers: 0)").unwrap();

        let err = load(&path).unwrap_err();
        assert!(err.to_string().contains("workers"), "{err:#}");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "(url: \"https://example.com\", workers: ").unwrap();

        let err = load(&path).unwrap_err();
        assert!(err.to_string().starts_with("failed to parse"), "{err:#}");
    }

    #[test]
    fn unparsable_url_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "(url: \"not a url\")").unwrap();

        assert!(load(&path).is_err());
    }
}
