//! Configuration management

use crate::error::{EdgeError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub analysis: AnalysisConfig,
    pub database: DatabaseConfig,
    pub llm: Option<LlmConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Minimum absolute sector impact that produces a trading signal
    pub signal_threshold: f64,
    /// Impact beyond which a signal is upgraded to STRONG BUY / STRONG SELL
    pub strong_threshold: f64,
    /// Absolute impact at or above which a signal is rated high risk
    pub high_risk_threshold: f64,
    /// Overall impact score above which the market call is bearish
    pub bearish_cutoff: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite database path (`~` is expanded)
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    /// LLM provider (anthropic, openai, compatible)
    pub provider: String,
    /// API key
    #[serde(default)]
    pub api_key: String,
    /// Model name
    pub model: Option<String>,
    /// Base URL for OpenAI-compatible endpoints
    pub base_url: Option<String>,
}

impl Config {
    /// Load configuration from an optional file plus `SENTIMENT_EDGE_*` env vars
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_with_env(path, Self::environment())
    }

    /// `SENTIMENT_EDGE_<SECTION>__<KEY>` variables, e.g. `SENTIMENT_EDGE_ANALYSIS__SIGNAL_THRESHOLD`
    fn environment() -> config::Environment {
        config::Environment::with_prefix("SENTIMENT_EDGE")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn load_with_env<P: AsRef<Path>>(path: P, env: config::Environment) -> Result<Self> {
        let path = path.as_ref();
        let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();

        let settings = config::Config::builder()
            .add_source(config::File::with_name(&expanded).required(false))
            .add_source(env)
            .build()
            .map_err(|e| EdgeError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| EdgeError::Config(e.to_string()))?;
        config.validate()?;

        tracing::debug!(path = %expanded, "Configuration loaded");
        Ok(config)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(raw, config::FileFormat::Toml))
            .build()
            .map_err(|e| EdgeError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| EdgeError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let a = &self.analysis;
        for (name, value) in [
            ("signal_threshold", a.signal_threshold),
            ("strong_threshold", a.strong_threshold),
            ("high_risk_threshold", a.high_risk_threshold),
            ("bearish_cutoff", a.bearish_cutoff),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(EdgeError::Config(format!(
                    "{} must be within [0, 1], got {}",
                    name, value
                )));
            }
        }

        if a.strong_threshold < a.signal_threshold {
            return Err(EdgeError::Config(
                "strong_threshold must not be below signal_threshold".into(),
            ));
        }

        if self.database.path.trim().is_empty() {
            return Err(EdgeError::Config("database.path is empty".into()));
        }

        Ok(())
    }
}

impl DatabaseConfig {
    pub fn resolved_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.path).into_owned())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            signal_threshold: 0.3,
            strong_threshold: 0.5,
            high_risk_threshold: 0.6,
            bearish_cutoff: 0.6,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: "sentiment_edge.db".to_string(),
        }
    }
}
