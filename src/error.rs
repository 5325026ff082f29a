use thiserror::Error;

/// Errors that can occur while turning a stored or user-supplied flow record
/// into validated `FlowAttributes`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlowConversionError {
    #[error("Failed to parse flow JSON: {0}")]
    JsonParseError(String),

    #[error("Unknown value '{value}' for field '{field}'")]
    UnknownVariant { field: String, value: String },

    #[error("Field '{field}' expects a number, but found '{value}'")]
    InvalidNumber { field: String, value: String },
}

/// Errors raised while loading the runtime configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for '{key}': {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

/// Errors that can occur while building an estimate report for a batch of flows.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReportError {
    #[error("Flow '{flow}' could not be estimated: {source}")]
    Conversion {
        flow: String,
        #[source]
        source: FlowConversionError,
    },
}
