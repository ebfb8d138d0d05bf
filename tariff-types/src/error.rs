use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the tariff workspace.
///
/// Reconciliation itself never fails; these errors come from the edges:
/// checked constructors, configuration loading, and fixture lookup.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TariffError {
    /// Invalid input argument (e.g. an interval with `begin >= end`).
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Configuration could not be parsed or is inconsistent.
    #[error("invalid config: {0}")]
    Config(String),

    /// A named resource could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of missing resource, e.g. "scenario swiss_cheese".
        what: String,
    },
}

impl TariffError {
    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build a `Config` error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Returns true if the error was caused by the caller's input rather than
    /// a missing resource.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidArg(_) | Self::Config(_))
    }
}

impl From<serde_json::Error> for TariffError {
    fn from(e: serde_json::Error) -> Self {
        Self::Config(e.to_string())
    }
}
