//! Error types for profile and configuration handling

use thiserror::Error;

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised while resolving configuration and connection profiles
#[derive(Debug, Error)]
pub enum CoreError {
    /// No team configuration file could be located
    #[error("could not find the configuration file {0}")]
    ConfigNotFound(String),

    /// A configuration file exists but is not valid JSON
    #[error("failed to parse configuration file {path}: {source}")]
    ConfigParse {
        /// Path of the offending file
        path: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// No profile matched the requested name or type
    #[error("failed to load profile '{name}' because '{reason}'")]
    ProfileNotFound {
        /// The profile name or type that was requested
        name: String,
        /// Why resolution failed
        reason: String,
    },

    /// The secure-properties store could not be read or decoded
    #[error("failed to load secure profile '{name}' because '{reason}'")]
    SecureProfileLoadFailed {
        /// The profile whose secure values were being resolved
        name: String,
        /// Why loading failed
        reason: String,
    },

    /// A connection cannot be established from the available properties
    #[error(
        "you must provide host, user, and password for a z/OSMF connection, \
         or the name of a z/OSMF profile that exists on your system"
    )]
    MissingConnectionArgs,

    /// A path given for submission does not point at a file
    #[error("the path {0} provided is not a file")]
    FileNotFound(String),

    /// Filesystem error while reading configuration
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
