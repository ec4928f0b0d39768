//! Configuration error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a marquee configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML or has mistyped fields
    #[error("Failed to parse marquee config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A field parsed but holds a value the marquee cannot use
    #[error("Invalid value for `{field}`: {reason}")]
    Invalid {
        /// Name of the offending field
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

/// Result type for configuration loading
pub type Result<T> = std::result::Result<T, ConfigError>;
