//! # Configuration
//!
//! Resolution order: defaults → config file → CLI flags.
//!
//! The file lives at `<config dir>/kana-drill/config.toml` unless `--config`
//! points somewhere else. Every field is optional and a missing file is not
//! an error.

use crate::drill::{DEFAULT_DRILL_SECONDS, DRILL_SECONDS_CHOICES};
use crate::models::Script;
use crate::quiz::{DEFAULT_POOL_SIZE, DEFAULT_TEST_SECONDS};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_LOG_FILE: &str = "kana-drill.log";

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct KanaConfig {
    #[serde(default)]
    pub drill: DrillConfig,
    #[serde(default)]
    pub test: TestConfig,
    #[serde(default)]
    pub data: DataConfig,
    pub script: Option<Script>,
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DrillConfig {
    pub seconds: Option<u32>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TestConfig {
    pub seconds: Option<u32>,
    pub pool_size: Option<usize>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DataConfig {
    pub words: Option<PathBuf>,
    pub vocab: Option<PathBuf>,
}

/// Values given on the command line; `None` means "not specified".
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub drill_seconds: Option<u32>,
    pub test_seconds: Option<u32>,
    pub pool_size: Option<usize>,
    pub script: Option<Script>,
    pub words: Option<PathBuf>,
    pub vocab: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub drill_seconds: u32,
    pub test_seconds: u32,
    pub pool_size: usize,
    pub script: Script,
    pub words_path: Option<PathBuf>,
    pub vocab_path: Option<PathBuf>,
    pub log_file: PathBuf,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("kana-drill").join("config.toml"))
}

/// Loads the config at `path`, or at the default location when `path` is
/// `None`. A file that does not exist yields the defaults.
pub fn load_config(path: Option<&Path>) -> Result<KanaConfig, ConfigError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) => p,
            None => {
                warn!("Could not determine config directory, using defaults");
                return Ok(KanaConfig::default());
            }
        },
    };

    if !path.exists() {
        debug!("No config file at {}", path.display());
        return Ok(KanaConfig::default());
    }

    let contents = fs::read_to_string(&path)?;
    let config: KanaConfig = toml::from_str(&contents)?;
    info!("Loaded config from {}", path.display());
    Ok(config)
}

pub fn resolve(config: KanaConfig, cli: Overrides) -> ResolvedConfig {
    let drill_seconds = cli
        .drill_seconds
        .or(config.drill.seconds)
        .unwrap_or(DEFAULT_DRILL_SECONDS);
    let drill_seconds = if DRILL_SECONDS_CHOICES.contains(&drill_seconds) {
        drill_seconds
    } else {
        warn!(
            "Drill seconds must be one of {:?}, got {}; using {}",
            DRILL_SECONDS_CHOICES, drill_seconds, DEFAULT_DRILL_SECONDS
        );
        DEFAULT_DRILL_SECONDS
    };

    let test_seconds = match cli.test_seconds.or(config.test.seconds) {
        Some(0) => {
            warn!("Test seconds must be positive; using {}", DEFAULT_TEST_SECONDS);
            DEFAULT_TEST_SECONDS
        }
        Some(s) => s,
        None => DEFAULT_TEST_SECONDS,
    };

    let pool_size = match cli.pool_size.or(config.test.pool_size) {
        Some(0) => {
            warn!("Pool size must be positive; using {}", DEFAULT_POOL_SIZE);
            DEFAULT_POOL_SIZE
        }
        Some(n) => n,
        None => DEFAULT_POOL_SIZE,
    };

    ResolvedConfig {
        drill_seconds,
        test_seconds,
        pool_size,
        script: cli.script.or(config.script).unwrap_or_default(),
        words_path: cli.words.or(config.data.words),
        vocab_path: cli.vocab.or(config.data.vocab),
        log_file: cli
            .log_file
            .or(config.log_file)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_when_nothing_given() {
        let resolved = resolve(KanaConfig::default(), Overrides::default());
        assert_eq!(resolved.drill_seconds, 10);
        assert_eq!(resolved.test_seconds, 120);
        assert_eq!(resolved.pool_size, 10);
        assert_eq!(resolved.script, Script::Hiragana);
        assert!(resolved.words_path.is_none());
        assert_eq!(resolved.log_file, PathBuf::from(DEFAULT_LOG_FILE));
    }

    #[test]
    fn test_file_values_are_used() {
        let config: KanaConfig = toml::from_str(
            r#"
script = "katakana"

[drill]
seconds = 15

[test]
seconds = 60
pool_size = 5

[data]
words = "/tmp/words.json"
"#,
        )
        .unwrap();
        let resolved = resolve(config, Overrides::default());
        assert_eq!(resolved.drill_seconds, 15);
        assert_eq!(resolved.test_seconds, 60);
        assert_eq!(resolved.pool_size, 5);
        assert_eq!(resolved.script, Script::Katakana);
        assert_eq!(resolved.words_path, Some(PathBuf::from("/tmp/words.json")));
    }

    #[test]
    fn test_cli_wins_over_file() {
        let config: KanaConfig = toml::from_str("[drill]\nseconds = 15\n").unwrap();
        let cli = Overrides {
            drill_seconds: Some(5),
            ..Default::default()
        };
        assert_eq!(resolve(config, cli).drill_seconds, 5);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let cli = Overrides {
            drill_seconds: Some(7),
            test_seconds: Some(0),
            pool_size: Some(0),
            ..Default::default()
        };
        let resolved = resolve(KanaConfig::default(), cli);
        assert_eq!(resolved.drill_seconds, 10);
        assert_eq!(resolved.test_seconds, 120);
        assert_eq!(resolved.pool_size, 10);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(Some(&dir.path().join("absent.toml"))).unwrap();
        assert!(config.drill.seconds.is_none());
    }

    #[test]
    fn test_load_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[test]\npool_size = 3").unwrap();
        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.test.pool_size, Some(3));
    }

    #[test]
    fn test_load_malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[drill\nseconds = ").unwrap();
        assert!(matches!(
            load_config(Some(file.path())),
            Err(ConfigError::Parse(_))
        ));
    }
}
