use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use jobwatch_core::JobKind;
use jobwatch_engine::{ApiSettings, EngineConfig};
use serde::{Deserialize, Serialize};
use url::Url;
use watch_logging::watch_info;

use crate::cli::Args;

const DEFAULT_CONFIG_PATH: &str = "./jobwatch.ron";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read config {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("could not parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
    #[error("invalid base_url {url:?}: {source}")]
    BaseUrl { url: String, source: url::ParseError },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    pub base_url: String,
    pub token: Option<String>,
    pub poll_interval_ms: u64,
    pub cancel_display_delay_ms: u64,
    pub connect_timeout_ms: u64,
    pub request_timeout_ms: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000/api".to_string(),
            token: None,
            poll_interval_ms: 5000,
            cancel_display_delay_ms: 5000,
            connect_timeout_ms: 10_000,
            request_timeout_ms: 30_000,
        }
    }
}

impl WatchConfig {
    /// Loads `path`, or `./jobwatch.ron` when no path is given. Only the
    /// implicit default may be absent.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::read(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_PATH);
                match Self::read(default) {
                    Err(ConfigError::Read { source, .. })
                        if source.kind() == io::ErrorKind::NotFound =>
                    {
                        Ok(Self::default())
                    }
                    other => other,
                }
            }
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = ron::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        watch_info!("loaded config from {:?}", path);
        Ok(config)
    }

    /// Command-line values win over file values.
    pub fn apply_overrides(&mut self, args: &Args) {
        if let Some(base_url) = &args.base_url {
            self.base_url = base_url.clone();
        }
        if let Some(token) = &args.token {
            self.token = Some(token.clone());
        }
        if let Some(ms) = args.poll_interval_ms {
            self.poll_interval_ms = ms;
        }
        if let Some(ms) = args.cancel_delay_ms {
            self.cancel_display_delay_ms = ms;
        }
    }

    pub fn engine_config(&self, kind: JobKind) -> Result<EngineConfig, ConfigError> {
        let base_url = Url::parse(&self.base_url).map_err(|source| ConfigError::BaseUrl {
            url: self.base_url.clone(),
            source,
        })?;
        let mut api = ApiSettings::new(base_url, kind.api_resource());
        api.token = self.token.clone().filter(|token| !token.is_empty());
        api.connect_timeout = Duration::from_millis(self.connect_timeout_ms);
        api.request_timeout = Duration::from_millis(self.request_timeout_ms);

        let mut config = EngineConfig::new(api);
        config.poll_interval = Duration::from_millis(self.poll_interval_ms);
        config.cancel_display_delay = Duration::from_millis(self.cancel_display_delay_ms);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn write_config(text: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(text.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let file = write_config(r#"(base_url: "https://jobs.example.com/api", poll_interval_ms: 1000)"#);

        let config = WatchConfig::load(Some(file.path())).expect("config loads");

        assert_eq!(
            config,
            WatchConfig {
                base_url: "https://jobs.example.com/api".to_string(),
                poll_interval_ms: 1000,
                ..WatchConfig::default()
            }
        );
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = WatchConfig::load(Some(&dir.path().join("absent.ron"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let file = write_config("(base_url: ");
        let err = WatchConfig::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn command_line_overrides_file_values() {
        let args = Args::try_parse_from([
            "jobwatch",
            "--kind",
            "articles",
            "--job-id",
            "7",
            "--base-url",
            "http://127.0.0.1:9000/api",
            "--token",
            "abc",
            "--cancel-delay-ms",
            "0",
        ])
        .expect("valid args");

        let mut config = WatchConfig::default();
        config.apply_overrides(&args);

        assert_eq!(config.base_url, "http://127.0.0.1:9000/api");
        assert_eq!(config.token.as_deref(), Some("abc"));
        assert_eq!(config.cancel_display_delay_ms, 0);
        assert_eq!(config.poll_interval_ms, 5000);
    }

    #[test]
    fn engine_config_uses_the_kind_resource() {
        let config = WatchConfig {
            token: Some(String::new()),
            poll_interval_ms: 250,
            ..WatchConfig::default()
        };

        let engine = config
            .engine_config(JobKind::RequirementIdentification)
            .expect("valid url");

        assert_eq!(engine.api.resource, "requirements-identification");
        assert_eq!(engine.api.token, None);
        assert_eq!(engine.poll_interval, Duration::from_millis(250));
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let config = WatchConfig {
            base_url: "not a url".to_string(),
            ..WatchConfig::default()
        };
        let err = config.engine_config(JobKind::ArticleExtraction).unwrap_err();
        assert!(matches!(err, ConfigError::BaseUrl { .. }));
    }
}
