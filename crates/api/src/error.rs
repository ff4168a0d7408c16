// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use acts_domain::DomainError;
use acts_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain/persistence errors and represent the API
/// contract: each variant maps to one HTTP status class, and `message` is
/// the caller-facing detail text. Internal errors are the exception: their
/// message is for server-side logs only and is never sent to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A requested resource was not found.
    ResourceNotFound {
        /// A human-readable description of what was not found.
        message: String,
    },
    /// A uniqueness rule was violated.
    DuplicateResource {
        /// A human-readable description of the conflict.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl ApiError {
    /// Returns the detail message carried by this error.
    #[must_use]
    pub fn detail(&self) -> &str {
        match self {
            Self::ResourceNotFound { message }
            | Self::DuplicateResource { message }
            | Self::InvalidInput { message, .. }
            | Self::Internal { message } => message,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ResourceNotFound { message } => {
                write!(f, "Not found: {message}")
            }
            Self::DuplicateResource { message } => {
                write!(f, "Duplicate resource: {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidName(msg) => ApiError::InvalidInput {
            field: String::from("name"),
            message: msg,
        },
        DomainError::InvalidRank(msg) => ApiError::InvalidInput {
            field: String::from("rank"),
            message: msg,
        },
        DomainError::InvalidDutyTitle(msg) => ApiError::InvalidInput {
            field: String::from("dutyTitle"),
            message: msg,
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("dutyStartDate"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
        DomainError::DateArithmeticOverflow { operation } => ApiError::InvalidInput {
            field: String::from("dutyStartDate"),
            message: format!("Date arithmetic overflow while {operation}"),
        },
    }
}

/// Translates an unexpected persistence error into an internal API error.
///
/// Expected persistence outcomes (not-found lookups, duplicate rejections)
/// are translated per operation by the handlers; anything that reaches this
/// function is unexpected.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    ApiError::Internal {
        message: err.to_string(),
    }
}
