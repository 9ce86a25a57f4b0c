use std::{fs, io::ErrorKind, path::Path};

use tracing::debug;

use super::{Config, ConfigPaths};
use crate::{PaSimpleError, Result, pulse::CHANNELS_MAX};

impl Config {
    /// Loads the configuration file from its default location
    ///
    /// A missing file, or an environment with no home directory, yields the
    /// default configuration.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed
    pub fn load() -> Result<Config> {
        match ConfigPaths::main_config() {
            Ok(path) => Self::load_or_default(&path),
            Err(e) => {
                debug!("No config directory ({e}), using defaults");
                Ok(Config::default())
            }
        }
    }

    /// Loads `path`, falling back to defaults if it does not exist
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed
    pub fn load_or_default(path: &Path) -> Result<Config> {
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content, Some(path)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Config file {} not found, using defaults", path.display());
                Ok(Config::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Parses configuration from TOML text
    ///
    /// # Errors
    /// Returns `TomlParse` on malformed TOML and `Config` on invalid values
    pub fn parse(content: &str, path: Option<&Path>) -> Result<Config> {
        let config: Config =
            toml::from_str(content).map_err(|e| PaSimpleError::toml_parse(e, path))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let record = &self.record;
        if record.channels == 0 || record.channels > CHANNELS_MAX {
            return Err(PaSimpleError::Config(format!(
                "record.channels must be between 1 and {CHANNELS_MAX}, got {}",
                record.channels
            )));
        }
        if record.rate == 0 {
            return Err(PaSimpleError::Config(
                "record.rate must be positive".to_string(),
            ));
        }
        if !record.format.is_wav_compatible() {
            return Err(PaSimpleError::Config(format!(
                "record.format '{}' cannot be written to a WAV file",
                record.format
            )));
        }
        if self.stream.app_name.is_empty() {
            return Err(PaSimpleError::Config(
                "stream.app_name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
