use serde::Deserialize;
use std::path::Path;

/// Optional TOML configuration with CLI defaults, e.g.:
///
/// ```toml
/// [defaults]
/// field = "close"
/// format = "console"
///
/// [stooq]
/// base_url = "https://stooq.com"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub defaults: Defaults,
    pub stooq: StooqConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Price column indicators run over.
    pub field: String,
    /// Output format when no --format flag is given.
    pub format: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            field: "close".to_string(),
            format: "console".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StooqConfig {
    pub base_url: String,
}

impl Default for StooqConfig {
    fn default() -> Self {
        Self {
            base_url: "https://stooq.com".to_string(),
        }
    }
}

impl CliConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }
}
