//! Core error types for outreach-core.
//!
//! The progression engine itself never fails. These errors cover the code
//! around it: configuration files, values parsed from outside the type
//! system, and status write-backs that don't follow the transition table.

use std::path::PathBuf;
use thiserror::Error;

use crate::status::LifecycleStatus;

/// Core error type for outreach-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Illegal status change
    #[error(transparent)]
    Transition(#[from] TransitionError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key not present in the configuration schema
    #[error("unknown config key: {0}")]
    UnknownKey(String),
}

/// Validation errors for values arriving as plain strings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("unknown lifecycle status '{0}' (expected saved, contacted, warm, cold or partnered)")]
    UnknownStatus(String),

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Returned when a status change has no edge in the transition table.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Invalid status transition: {from} → {to}")]
pub struct TransitionError {
    pub from: LifecycleStatus,
    pub to: LifecycleStatus,
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
