use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::Level;

pub const DEFAULT_CONFIG_PATH: &str = "config/config.toml";
pub const DEFAULT_APP_NAME: &str = "daylight-metrics";
pub const DEFAULT_LOG_LEVEL: Level = Level::INFO;

/// Ambient settings. Compliance thresholds always come from the command line.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub app: AppSection,
    pub logging: LoggingSection,
    #[serde(default)]
    pub analysis: Option<AnalysisSection>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSection {
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSection {
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AnalysisSection {
    /// Score rooms on the rayon pool (default: true)
    pub parallel: Option<bool>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

pub fn load_default() -> Result<Config, ConfigError> {
    load_from_path(DEFAULT_CONFIG_PATH)
}

pub fn load_from_path(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)?;
    Ok(config)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app: AppSection {
                name: DEFAULT_APP_NAME.to_string(),
            },
            logging: LoggingSection {
                level: DEFAULT_LOG_LEVEL.to_string(),
            },
            analysis: None,
        }
    }
}

impl Config {
    /// Returns the configured log level, falling back to INFO when unrecognised.
    pub fn log_level(&self) -> Level {
        self.logging.level.parse().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// Returns whether rooms are scored in parallel (default: true)
    pub fn parallel(&self) -> bool {
        self.analysis
            .as_ref()
            .and_then(|section| section.parallel)
            .unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn shipped_config_is_valid() -> Result<(), Box<dyn std::error::Error>> {
        let config = load_default()?;
        assert_eq!(config.app.name, DEFAULT_APP_NAME);
        assert_eq!(config.log_level(), Level::INFO);
        assert!(config.parallel());
        Ok(())
    }

    #[test]
    fn missing_analysis_section_is_allowed() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = std::env::temp_dir();
        let unique = SystemTime::now().duration_since(UNIX_EPOCH)?.as_nanos();
        let path = temp_dir.join(format!("daylight-config-{unique}.toml"));
        let contents = r#"
[app]
name = "daylight-metrics"

[logging]
level = "debug"
"#;
        fs::write(&path, contents)?;

        let result = load_from_path(&path)?;
        let _ = fs::remove_file(&path);

        assert!(result.parallel());
        assert_eq!(result.log_level(), Level::DEBUG);
        Ok(())
    }

    #[test]
    fn sequential_mode_and_unknown_level() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = std::env::temp_dir();
        let unique = SystemTime::now().duration_since(UNIX_EPOCH)?.as_nanos();
        let path = temp_dir.join(format!("daylight-config-seq-{unique}.toml"));
        let contents = r#"
[app]
name = "daylight-metrics"

[logging]
level = "loud"

[analysis]
parallel = false
"#;
        fs::write(&path, contents)?;

        let result = load_from_path(&path)?;
        let _ = fs::remove_file(&path);

        assert!(!result.parallel());
        assert_eq!(result.log_level(), DEFAULT_LOG_LEVEL);
        Ok(())
    }

    #[test]
    fn default_config_matches_shipped_defaults() {
        let config = Config::default();

        assert_eq!(config.log_level(), Level::INFO);
        assert!(config.parallel());
    }

    #[test]
    fn missing_config_file_returns_read_error() {
        let temp_dir = std::env::temp_dir();
        let unique = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before unix epoch")
            .as_nanos();
        let path = temp_dir.join(format!("daylight-config-missing-{unique}.toml"));

        let result = load_from_path(&path);

        assert!(matches!(result, Err(ConfigError::Read(_))));
    }

    #[test]
    fn invalid_toml_returns_parse_error() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = std::env::temp_dir();
        let unique = SystemTime::now().duration_since(UNIX_EPOCH)?.as_nanos();
        let path = temp_dir.join(format!("daylight-config-invalid-{unique}.toml"));
        fs::write(&path, "not = [valid")?;

        let result = load_from_path(&path);
        let _ = fs::remove_file(&path);

        assert!(matches!(result, Err(ConfigError::Parse(_))));
        Ok(())
    }
}
