/// CLI configuration
use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "snip.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SnipConfig {
    #[serde(default = "default_output")]
    pub output: OutputSettings,

    #[serde(default = "default_logging")]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputSettings {
    #[serde(default = "default_directory")]
    pub directory: PathBuf,

    #[serde(default)]
    pub overwrite: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingSettings {
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl SnipConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist. Without one, `snip.toml` in the working
    /// directory is used if present. `SNIP_`-prefixed environment variables
    /// override file values (`SNIP_OUTPUT_DIRECTORY`, `SNIP_LOGGING_FILTER`, ...).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()).required(true));
            }
            None => {
                let config_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        // Override with environment variables (prefixed with SNIP_)
        settings = settings.add_source(
            config::Environment::with_prefix("SNIP")
                .separator("_")
                .try_parsing(true),
        );

        let config = settings.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.logging.filter.trim().is_empty() {
            return Err(CliError::Config("logging.filter must not be empty".to_string()));
        }

        if self.output.directory.exists() && !self.output.directory.is_dir() {
            return Err(CliError::Config(format!(
                "output.directory {:?} is not a directory",
                self.output.directory
            )));
        }

        Ok(())
    }
}

// Default values
fn default_output() -> OutputSettings {
    OutputSettings {
        directory: default_directory(),
        overwrite: false,
    }
}

fn default_directory() -> PathBuf {
    PathBuf::from(".")
}

fn default_logging() -> LoggingSettings {
    LoggingSettings {
        filter: default_filter(),
    }
}

fn default_filter() -> String {
    "snip=info,snip_cli=info,snip_audio=info".to_string()
}

impl Default for SnipConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            logging: default_logging(),
        }
    }
}
