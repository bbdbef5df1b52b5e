/// Structured error types for stairworks-core.
///
/// The swatch selector itself never fails; these cover loading and
/// validating the site configuration and catalog.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for stairworks-core operations
#[derive(Error, Debug)]
pub enum StairsError {
    /// I/O operation failed
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// Config file is not valid TOML or does not match the schema
    #[error("Failed to parse config {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Config could not be serialized back to TOML
    #[error("Failed to serialize config: {source}")]
    ConfigSerialize {
        #[from]
        source: toml::ser::Error,
    },

    /// Finish id does not match the slug format
    #[error("Invalid finish id '{id}': {reason}")]
    InvalidFinishId { id: String, reason: &'static str },

    /// Finish color is not a hex code or a named CSS color
    #[error("Invalid color '{value}' for finish '{id}': expected #rgb, #rrggbb or a color name")]
    InvalidColor { id: String, value: String },

    /// The same finish id appears twice in the catalog
    #[error("Duplicate finish id '{id}' in catalog")]
    DuplicateFinish { id: String },

    /// The same model name appears twice in the catalog
    #[error("Duplicate model name '{name}' in catalog")]
    DuplicateModel { name: String },

    /// Configuration error
    #[error("Configuration error: {reason}")]
    Config { reason: String },
}

/// Result type alias for stairworks-core operations
pub type Result<T> = std::result::Result<T, StairsError>;

impl StairsError {
    /// Create a config parse error for the given file
    pub fn config_parse(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::ConfigParse {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid finish id error
    pub fn invalid_finish_id(id: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidFinishId {
            id: id.into(),
            reason,
        }
    }

    /// Create an invalid color error
    pub fn invalid_color(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidColor {
            id: id.into(),
            value: value.into(),
        }
    }

    /// Create a duplicate finish error
    pub fn duplicate_finish(id: impl Into<String>) -> Self {
        Self::DuplicateFinish { id: id.into() }
    }

    /// Create a duplicate model error
    pub fn duplicate_model(name: impl Into<String>) -> Self {
        Self::DuplicateModel { name: name.into() }
    }

    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}
