//! Error types for the SolarEdge CSV exporter.
//!
//! Every error here is fatal for the run. The categories exist so the
//! message printed on exit says which side broke: the invocation, the
//! vendor API, the data it returned, or the output sink.

use thiserror::Error;

/// Result type alias using our custom error types.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Top-level error type that encompasses all application errors.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related errors
    #[error("configuration error")]
    Config(#[from] ConfigError),

    /// SolarEdge transport and response errors
    #[error("SolarEdge API error")]
    Api(#[from] ApiError),

    /// Response data that breaks the expected shape
    #[error("unexpected data from SolarEdge")]
    Contract(#[from] ContractError),

    /// CSV sink errors
    #[error("output error")]
    Output(#[from] OutputError),
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required configuration value is missing
    #[error("missing required configuration: {0}")]
    Missing(String),

    /// Configuration value is invalid
    #[error("invalid configuration value for {field}: {message}")]
    Invalid { field: String, message: String },
}

/// SolarEdge communication errors.
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("server error (status {status}): {message}")]
    ServerError { status: u16, message: String },

    /// Response body was not the JSON we asked for
    #[error("malformed JSON from {path}: {message}")]
    MalformedJson { path: String, message: String },

    /// Network timeout
    #[error("request timed out after {0} seconds")]
    Timeout(u64),
}

/// Violations of the powerDetails / dataPeriod response contract.
#[derive(Error, Debug)]
pub enum ContractError {
    /// Meter type name outside the five requested meters
    #[error("unknown meter type '{0}'")]
    UnknownMeter(String),

    /// One of the requested meters is absent from the response
    #[error("meter '{0}' missing from response")]
    MissingMeter(String),

    /// The same meter appears twice in one response
    #[error("meter '{0}' returned more than once")]
    DuplicateMeter(String),

    /// Meters in one chunk disagree on sample count
    #[error("meter '{meter}' has {actual} samples, expected {expected}")]
    MisalignedSamples {
        meter: String,
        expected: usize,
        actual: usize,
    },

    /// Failed to parse a sample timestamp
    #[error("failed to parse date/time from '{text}': {message}")]
    Timestamp { text: String, message: String },

    /// dataPeriod with the end before the start
    #[error("invalid data period: {start} is after {end}")]
    InvalidPeriod { start: String, end: String },

    /// The site has no recorded data
    #[error("site has no recorded data period")]
    NoData,
}

/// Output sink errors.
#[derive(Error, Debug)]
pub enum OutputError {
    /// Opening or flushing the sink failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Writing a CSV record failed
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),
}

impl ConfigError {
    /// Creates a new missing configuration error.
    pub fn missing(field: impl Into<String>) -> Self {
        Self::Missing(field.into())
    }

    /// Creates a new invalid configuration error.
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl ApiError {
    /// Creates a server error from HTTP status and response body.
    pub fn server_error(status: reqwest::StatusCode, body: String) -> Self {
        Self::ServerError {
            status: status.as_u16(),
            message: body,
        }
    }

    /// Creates a malformed JSON error for a request path.
    pub fn malformed_json(path: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::MalformedJson {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

impl ContractError {
    /// Creates a misaligned samples error.
    pub fn misaligned(meter: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::MisalignedSamples {
            meter: meter.into(),
            expected,
            actual,
        }
    }

    /// Creates a timestamp parse error.
    pub fn timestamp(text: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::Timestamp {
            text: text.into(),
            message: err.to_string(),
        }
    }

    /// Creates an invalid period error.
    pub fn invalid_period(start: impl std::fmt::Display, end: impl std::fmt::Display) -> Self {
        Self::InvalidPeriod {
            start: start.to_string(),
            end: end.to_string(),
        }
    }
}
