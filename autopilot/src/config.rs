use anyhow::{Context, Result};
use overdrive_core::RaceRules;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_BOT: &str = "cascade";
pub const DEFAULT_ROUNDS_DIR: &str = "rounds";
pub const ROUNDS_DIR_ENV: &str = "OVERDRIVE_ROUNDS_DIR";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutopilotConfig {
    #[serde(default = "default_bot")]
    pub bot: String,
    /// Directory the game runner writes `<round>/state.json` into.
    #[serde(default = "default_rounds_dir")]
    pub rounds_dir: PathBuf,
    #[serde(default)]
    pub rules: RaceRules,
}

fn default_bot() -> String {
    DEFAULT_BOT.to_string()
}

fn default_rounds_dir() -> PathBuf {
    PathBuf::from(DEFAULT_ROUNDS_DIR)
}

impl Default for AutopilotConfig {
    fn default() -> Self {
        Self {
            bot: default_bot(),
            rounds_dir: default_rounds_dir(),
            rules: RaceRules::default(),
        }
    }
}

impl AutopilotConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed reading config {}", path.display()))?;
        serde_json::from_str(&data)
            .with_context(|| format!("failed parsing config {}", path.display()))
    }

    /// Config file if given, otherwise defaults; `OVERDRIVE_ROUNDS_DIR` wins
    /// over both.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.override_rounds_dir(env::var(ROUNDS_DIR_ENV).ok());
        Ok(config)
    }

    fn override_rounds_dir(&mut self, value: Option<String>) {
        if let Some(dir) = value.filter(|dir| !dir.trim().is_empty()) {
            tracing::debug!(rounds_dir = %dir, "rounds dir overridden from {ROUNDS_DIR_ENV}");
            self.rounds_dir = PathBuf::from(dir.trim());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config: AutopilotConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AutopilotConfig::default());
        assert_eq!(config.bot, "cascade");
        assert_eq!(config.rounds_dir, PathBuf::from("rounds"));
    }

    #[test]
    fn blank_override_is_ignored() {
        let mut config = AutopilotConfig::default();
        config.override_rounds_dir(Some("  ".to_string()));
        assert_eq!(config.rounds_dir, PathBuf::from("rounds"));
        config.override_rounds_dir(None);
        assert_eq!(config.rounds_dir, PathBuf::from("rounds"));
        config.override_rounds_dir(Some("/tmp/match-7".to_string()));
        assert_eq!(config.rounds_dir, PathBuf::from("/tmp/match-7"));
    }
}
