use std::path::PathBuf;

use serde::Deserialize;

/// How ranked results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Top-level CLI configuration, loaded from `peoria.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub output: OutputConfig,
    pub session: SessionConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub show_hidden_total: bool,
    pub show_badges: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            show_hidden_total: true,
            show_badges: true,
        }
    }
}

/// Where the last ranked batch is kept between runs, for rank-change arrows.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub results_path: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            results_path: PathBuf::from(".peoria-results.json"),
        }
    }
}

impl CliConfig {
    /// Load config from `peoria.toml` (or `$PEORIA_CONFIG`), then apply env var overrides.
    pub fn load() -> Self {
        let path = std::env::var("PEORIA_CONFIG").unwrap_or_else(|_| "peoria.toml".to_string());
        let mut config = match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<CliConfig>(&content) {
                Ok(cfg) => {
                    tracing::debug!("Loaded configuration from {path}");
                    cfg
                },
                Err(e) => {
                    tracing::warn!("Failed to parse {path}: {e}, using defaults");
                    CliConfig::default()
                },
            },
            Err(_) => {
                tracing::debug!("No {path} found, using defaults");
                CliConfig::default()
            },
        };

        if let Ok(format) = std::env::var("PEORIA_FORMAT") {
            match format.as_str() {
                "table" => config.output.format = OutputFormat::Table,
                "json" => config.output.format = OutputFormat::Json,
                other => tracing::warn!("Ignoring unknown PEORIA_FORMAT={other}"),
            }
        }
        if let Ok(path) = std::env::var("PEORIA_RESULTS_PATH")
            && !path.is_empty()
        {
            config.session.results_path = PathBuf::from(path);
        }

        config
    }

    /// Problems that make the config unusable. Empty when valid.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.session.results_path.as_os_str().is_empty() {
            problems.push("session.results_path must not be empty".to_string());
        }
        problems
    }
}
