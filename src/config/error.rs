//! Error types for loading, defaulting and saving the installer configuration.

use std::path::PathBuf;

use thiserror::Error;

use super::host::HostError;

/// Error type for configuration operations.
///
/// `FileRead`, `Parse` and `Schema` together form the "config file" error
/// kind: the document exists but cannot be used. Callers are expected to report these
/// and abort rather than fall back to defaults.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Cannot open config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not a valid YAML document.
    #[error("Config file '{}' is not a valid YAML document: {source}", path.display())]
    Parse {
        /// Path to the config file
        path: PathBuf,
        /// Underlying YAML error
        #[source]
        source: serde_yaml::Error,
    },

    /// The document is valid YAML but a value has the wrong shape or type.
    #[error("Config file '{}' has an invalid value: {source}", path.display())]
    Schema {
        /// Path to the config file
        path: PathBuf,
        /// Underlying deserialization error
        #[source]
        source: serde_yaml::Error,
    },

    /// A host entry in the document failed validation.
    #[error("Invalid host entry #{index}: {source}")]
    InvalidHost {
        /// Zero-based position of the entry in the `hosts` list
        index: usize,
        /// The failed invariant
        #[source]
        source: HostError,
    },

    /// Failed to create the ansible inventory directory.
    #[error("Failed to create directory '{}': {source}", path.display())]
    CreateDir {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the configuration file.
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to render the persisted settings as YAML.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[source] serde_yaml::Error),

    /// Failed to render command output as JSON.
    #[error("Failed to render JSON output: {0}")]
    Json(#[source] serde_json::Error),

    /// No base directory is known for the default config path.
    #[error("Cannot determine config directory: neither XDG_CONFIG_HOME nor a home directory is set")]
    NoConfigHome,
}

impl ConfigError {
    /// Returns `true` if the document itself could not be read or parsed.
    #[must_use]
    pub const fn is_file_error(&self) -> bool {
        matches!(
            self,
            Self::FileRead { .. } | Self::Parse { .. } | Self::Schema { .. }
        )
    }

    /// Returns `true` for failures writing to the filesystem.
    #[must_use]
    pub const fn is_write_error(&self) -> bool {
        matches!(self, Self::CreateDir { .. } | Self::FileWrite { .. })
    }
}
