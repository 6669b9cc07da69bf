//! Configuration for the blackboard watch subsystem.
//!
//! Loaded hierarchically:
//! - Default values as code base
//! - Configuration file named by `CONFIG_PATH`
//! - Environment variables prefixed `BLACKBOARD__` (highest priority)
mod watch;
pub use watch::*;

#[cfg(test)]
mod config_test;

use std::env;

use config::Config;
use config::Environment;
use config::File;
use serde::Deserialize;
use serde::Serialize;

use crate::Result;

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct BlackboardConfig {
    /// Watch registry and publish channel settings
    #[serde(default)]
    pub watch: WatchConfig,
}

impl BlackboardConfig {
    /// Loads configuration from defaults, `CONFIG_PATH` and environment variables.
    ///
    /// # Note
    /// This method does NOT validate the configuration. Callers MUST call `validate()`
    /// once all overrides are applied.
    ///
    /// # Examples
    /// ```ignore
    /// std::env::set_var("BLACKBOARD__WATCH__ROOT_TOPIC", "board");
    /// let cfg = BlackboardConfig::new()?.validate()?;
    /// ```
    pub fn new() -> Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        if let Ok(config_path) = env::var("CONFIG_PATH") {
            builder = builder.add_source(File::with_name(&config_path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("BLACKBOARD")
                .separator("__")
                .ignore_empty(true)
                .try_parsing(true),
        );

        let config: Self = builder.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Applies overrides from a file on top of the current values.
    ///
    /// Environment variables still take precedence over the file.
    pub fn with_override_config(
        &self,
        path: &str,
    ) -> Result<Self> {
        let config: Self = Config::builder()
            .add_source(Config::try_from(self)?)
            .add_source(File::with_name(path))
            .add_source(
                Environment::with_prefix("BLACKBOARD")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    /// Validates every section and returns the validated instance.
    pub fn validate(self) -> Result<Self> {
        self.watch.validate()?;
        Ok(self)
    }
}
