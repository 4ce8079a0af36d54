//! Error type definitions.
//!
//! This module defines the lookup failure taxonomy and the errors raised
//! outside the lookup engine (initialization, report writing).

use log::SetLoggerError;
use serde::Serialize;
use strum_macros::{Display, EnumIter as EnumIterMacro};
use thiserror::Error;

use crate::dns::RecordKind;

/// Failure of a single DNS query.
///
/// Every variant is recoverable: the resolver adapter collapses it into an
/// empty result for that one query and the scan carries on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The queried name does not exist (NXDOMAIN).
    #[error("{name}: name does not exist")]
    NameNotFound {
        /// Name that was queried
        name: String,
    },

    /// The name exists but has no records of the requested kind.
    #[error("{name}: no {kind} records")]
    NoRecordsOfKind {
        /// Name that was queried
        name: String,
        /// Record kind that was requested
        kind: RecordKind,
    },

    /// The query did not complete within the per-query timeout.
    #[error("{name}: {kind} query timed out")]
    QueryTimeout {
        /// Name that was queried
        name: String,
        /// Record kind that was requested
        kind: RecordKind,
    },

    /// Any other resolver or protocol failure (SERVFAIL, refused, I/O, ...).
    #[error("{name}: {kind} query failed: {message}")]
    ProtocolError {
        /// Name that was queried
        name: String,
        /// Record kind that was requested
        kind: RecordKind,
        /// Resolver error message
        message: String,
    },

    /// An address could not be parsed or computed.
    #[error("invalid IPv4 address '{input}'")]
    AddressParseError {
        /// Offending input
        input: String,
    },
}

impl LookupError {
    /// Returns the fieldless tag of this error, used for statistics.
    pub fn kind(&self) -> LookupErrorKind {
        match self {
            LookupError::NameNotFound { .. } => LookupErrorKind::NameNotFound,
            LookupError::NoRecordsOfKind { .. } => LookupErrorKind::NoRecordsOfKind,
            LookupError::QueryTimeout { .. } => LookupErrorKind::QueryTimeout,
            LookupError::ProtocolError { .. } => LookupErrorKind::ProtocolError,
            LookupError::AddressParseError { .. } => LookupErrorKind::AddressParseError,
        }
    }

    /// Whether this outcome is an ordinary negative answer rather than a fault.
    ///
    /// Neighbor and subdomain probing produce mostly negative answers, so these
    /// are logged at debug level only.
    pub fn is_negative_answer(&self) -> bool {
        matches!(
            self,
            LookupError::NameNotFound { .. } | LookupError::NoRecordsOfKind { .. }
        )
    }
}

/// Closed set of lookup failure tags.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIterMacro, Display, Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum LookupErrorKind {
    /// NXDOMAIN
    #[strum(to_string = "name not found")]
    NameNotFound,
    /// Name exists, no records of the requested kind
    #[strum(to_string = "no records of kind")]
    NoRecordsOfKind,
    /// Per-query timeout elapsed
    #[strum(to_string = "query timeout")]
    QueryTimeout,
    /// Other resolver failure
    #[strum(to_string = "protocol error")]
    ProtocolError,
    /// Invalid or out-of-range address
    #[strum(to_string = "address parse error")]
    AddressParseError,
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// The scan target is not a valid domain name.
    #[error("Invalid target domain '{target}': {reason}")]
    InvalidTargetError {
        /// Target as supplied by the caller
        target: String,
        /// Why it was rejected
        reason: String,
    },
}

/// Error types for report generation.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Error creating or writing the report file.
    #[error("Report I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error formatting the report document.
    #[error("Report formatting error: {0}")]
    Format(#[from] std::fmt::Error),

    /// Error serializing the report.
    #[error("Report serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
