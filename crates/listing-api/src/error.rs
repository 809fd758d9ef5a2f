use std::time::Duration;

use thiserror::Error;

/// Programming or setup mistakes that must surface to the caller immediately.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// A filter label did not match any recognized value.
    #[error("unrecognized {kind} value '{value}'")]
    UnknownValue { kind: &'static str, value: String },

    /// Page sizes are restricted to the sizes offered by the storefront.
    #[error("page size {0} is not one of 12, 24 or 48")]
    InvalidPageSize(u32),

    /// Pages are numbered from 1.
    #[error("page must be at least 1 (got {0})")]
    InvalidPage(u32),

    /// The filter needs an attribute the configured source does not expose.
    #[error("search scope '{scope}' requires a source that exposes the '{field}' field")]
    MissingCapability {
        scope: &'static str,
        field: &'static str,
    },

    /// The listing source has not been given enough information to run.
    #[error("search is not configured: {0}")]
    Unconfigured(String),
}

impl ConfigurationError {
    pub(crate) fn unknown(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownValue {
            kind,
            value: value.into(),
        }
    }
}

/// Failures reported by a listing source while answering a query.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// The request could not reach the store or the store rejected it.
    #[error("listing source request failed: {0}")]
    Transport(String),

    /// The store did not answer in time.
    #[error("listing source timed out after {0:?}")]
    Timeout(Duration),

    /// The source cannot serve this kind of request.
    #[error("listing source does not support {0}")]
    Unsupported(&'static str),

    /// The store answered with data that could not be understood.
    #[error("listing source returned malformed data: {0}")]
    Malformed(String),

    /// The source stopped early because a newer query replaced this one.
    #[error("query {0} was superseded by a newer search")]
    Superseded(u64),
}
