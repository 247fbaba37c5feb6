//! Configuration loading errors.

use std::path::PathBuf;

use thiserror::Error;

/// Error returned when a style configuration cannot be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid YAML or has the wrong shape.
    #[error("invalid style configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The configuration file could not be read.
    #[error("failed to read style configuration '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
