//! Custom Error and Result types for this library

use std::fmt;

use thiserror::Error;

use crate::{config::ConfigManagerBuilderError, store::FeedStoreBuilderError};

/// Draft fields that must be filled in before an item can be created
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The item title
    Title,
    /// The item body text
    Content,
    /// The section name of a custom item
    CustomLabel,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Title => write!(f, "title"),
            Field::Content => write!(f, "content"),
            Field::CustomLabel => write!(f, "customLabel"),
        }
    }
}

/// The only kind of failure a store operation can produce. Rejected drafts
/// never mutate the store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required draft field was left empty
    #[error("missing required field: {_0}")]
    MissingField(Field),
}

/// Custom Error type for this library
#[derive(Error, Debug)]
pub enum FeedError {
    /// A draft was rejected
    #[error("validation error: {_0}")]
    Validation(#[from] ValidationError),

    /// Reading or writing the config file failed
    #[error("config file error: {_0}")]
    Io(#[from] std::io::Error),

    /// The config file could not be serialized or parsed
    #[error("config format error: {_0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Error resulting from failure to build the config manager
    #[error("failed to build config manager: {_0}")]
    ConfigBuild(#[from] ConfigManagerBuilderError),

    /// Error resulting from failure to build the feed store
    #[error("failed to build feed store: {_0}")]
    StoreBuild(#[from] FeedStoreBuilderError),

    /// The platform did not provide a project directory
    #[error("failed to get project directory")]
    ProjectDirectory,
}

/// Custom Result type for this library. All Errors exposed by this library
/// will be returned as [`FeedError`]
pub type Result<T> = std::result::Result<T, FeedError>;
