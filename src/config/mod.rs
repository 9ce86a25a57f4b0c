//! Configuration schema definitions and loading.
//!
//! A single optional TOML file supplies defaults for stream identity,
//! buffer metrics and recording layout. All fields have sensible defaults.

mod general;
mod loading;
mod paths;

#[cfg(test)]
mod tests;

pub use general::{GeneralConfig, LogLevel};
pub use paths::ConfigPaths;

use serde::{Deserialize, Serialize};

use crate::{pulse::StreamConfig, wav::RecordOptions};

/// Main configuration structure for pasimple.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Identity and buffering used for every stream that is opened.
    #[serde(default)]
    pub stream: StreamConfig,

    /// Layout used when recording to a WAV file.
    #[serde(default)]
    pub record: RecordOptions,
}
