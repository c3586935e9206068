use std::{fs, path::Path, str::FromStr};

use ron::{self, extensions::Extensions};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Defaults of the original web front end.
pub const DEFAULT_WIDTH: u16 = 40;
pub const DEFAULT_HEIGHT: u16 = 20;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Cannot read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid settings file: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("Unknown log level '{0}'")]
    InvalidLogLevel(String),
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub width: Option<u16>,
    #[serde(default)]
    pub height: Option<u16>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub solve: Option<bool>,
    #[serde(default)]
    pub log_level: Option<String>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path)?;
        Self::from_ron_str(&text)
    }

    pub fn from_ron_str(text: &str) -> Result<Self, SettingsError> {
        let options = ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
        let settings: Settings = options.from_str(text)?;
        settings.get_log_level()?;
        Ok(settings)
    }

    pub fn set_width(mut self, value: u16) -> Self {
        self.width = Some(value);
        self
    }

    pub fn get_width(&self) -> u16 {
        self.width.unwrap_or(DEFAULT_WIDTH)
    }

    pub fn set_height(mut self, value: u16) -> Self {
        self.height = Some(value);
        self
    }

    pub fn get_height(&self) -> u16 {
        self.height.unwrap_or(DEFAULT_HEIGHT)
    }

    pub fn set_seed(mut self, value: u64) -> Self {
        self.seed = Some(value);
        self
    }

    pub fn get_seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn set_solve(mut self, value: bool) -> Self {
        self.solve = Some(value);
        self
    }

    pub fn get_solve(&self) -> bool {
        self.solve.unwrap_or(true)
    }

    pub fn set_log_level(mut self, value: log::Level) -> Self {
        self.log_level = Some(value.to_string());
        self
    }

    pub fn get_log_level(&self) -> Result<log::Level, SettingsError> {
        match &self.log_level {
            None => Ok(log::Level::Warn),
            Some(level) => log::Level::from_str(level)
                .map_err(|_| SettingsError::InvalidLogLevel(level.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = Settings::new();
        assert_eq!(settings.get_width(), 40);
        assert_eq!(settings.get_height(), 20);
        assert_eq!(settings.get_seed(), None);
        assert!(settings.get_solve());
        assert_eq!(settings.get_log_level().unwrap(), log::Level::Warn);

        assert_eq!(Settings::from_ron_str("()").unwrap(), settings);
    }

    #[test]
    fn parse_ron() {
        let settings = Settings::from_ron_str(
            r#"(
                width: 12,
                height: 7,
                seed: 42,
                solve: false,
                log_level: "debug",
            )"#,
        )
        .unwrap();

        assert_eq!(settings.get_width(), 12);
        assert_eq!(settings.get_height(), 7);
        assert_eq!(settings.get_seed(), Some(42));
        assert!(!settings.get_solve());
        assert_eq!(settings.get_log_level().unwrap(), log::Level::Debug);
    }

    #[test]
    fn builders_override() {
        let settings = Settings::new()
            .set_width(3)
            .set_height(4)
            .set_seed(5)
            .set_solve(false)
            .set_log_level(log::Level::Trace);

        assert_eq!((settings.get_width(), settings.get_height()), (3, 4));
        assert_eq!(settings.get_seed(), Some(5));
        assert!(!settings.get_solve());
        assert_eq!(settings.get_log_level().unwrap(), log::Level::Trace);
    }

    #[test]
    fn invalid_files() {
        assert!(matches!(
            Settings::from_ron_str("(width: -1)"),
            Err(SettingsError::Parse(_))
        ));
        assert!(matches!(
            Settings::from_ron_str(r#"(log_level: "loud")"#),
            Err(SettingsError::InvalidLogLevel(level)) if level == "loud"
        ));
        assert!(matches!(
            Settings::load(Path::new("/nonexistent/mazing.ron")),
            Err(SettingsError::Io(_))
        ));
    }
}
