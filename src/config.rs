use config::{Config, Environment, File as ConfigFile};
use serde::Deserialize;
use std::path::PathBuf;

use crate::error::Result;

/// Patterns used when neither the command line nor the settings layer name any.
pub const DEFAULT_PATTERNS: [&str; 5] = ["*.incomplete", "*.failed", "*.tmp", "*.bak", "*.part"];

const SETTINGS_FILE: &str = "soulseek-cleaner";
const ENV_PREFIX: &str = "SOULSEEK_CLEANER";

/// Where and how a single cleanup run operates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleaningConfig {
    pub root: PathBuf,
    pub dry_run: bool,
    pub patterns: Vec<String>,
}

impl CleaningConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            dry_run: false,
            patterns: default_patterns(),
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.patterns = patterns.into_iter().map(Into::into).collect();
        self
    }
}

pub fn default_patterns() -> Vec<String> {
    DEFAULT_PATTERNS.iter().map(|p| p.to_string()).collect()
}

/// Optional user settings read from `soulseek-cleaner.{toml,yaml,json}` in
/// the working directory and from `SOULSEEK_CLEANER_*` environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub patterns: Option<Vec<String>>,
}

impl Settings {
    pub fn load() -> Result<Settings> {
        let builder = Config::builder()
            .add_source(ConfigFile::with_name(SETTINGS_FILE).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("patterns"),
            )
            .build()?;
        Ok(builder.try_deserialize::<Settings>()?)
    }

    /// Command line patterns win, even an explicitly empty list; then the
    /// settings layer; then [`DEFAULT_PATTERNS`].
    pub fn resolve_patterns(&self, cli_patterns: Option<Vec<String>>) -> Vec<String> {
        cli_patterns
            .or_else(|| self.patterns.clone())
            .unwrap_or_else(default_patterns)
    }
}
