use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("{message} {reason_code:?}")]
    Database {
        message: String,
        reason_code: Option<String>,
    },
    #[error("{message}")]
    DuplicateKey {
        message: String,
    },
    #[error("{message}")]
    NotFound {
        message: String,
    },
    // The store could not be read or written. The core never retries, `retryable` only tells
    // the caller whether trying again later may succeed.
    #[error("{message} {reason_code:?} {retryable}")]
    StoreUnavailable {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    #[error("{message}")]
    InvalidFilter {
        message: String,
    },
    #[error("{message} {reason_code:?}")]
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    #[error("{message}")]
    Serialization {
        message: String,
    },
    #[error("{message}")]
    Cancelled {
        message: String,
    },
    #[error("{message} {reason_code:?}")]
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn database(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Database { message: message.to_string(), reason_code }
    }

    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn store_unavailable(message: &str, reason_code: Option<String>, retryable: bool) -> LibraryError {
        LibraryError::StoreUnavailable { message: message.to_string(), reason_code, retryable }
    }

    pub fn invalid_filter(message: &str) -> LibraryError {
        LibraryError::InvalidFilter { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn cancelled(message: &str) -> LibraryError {
        LibraryError::Cancelled { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn retryable(&self) -> bool {
        match self {
            LibraryError::StoreUnavailable { retryable, .. } => { *retryable }
            _ => { false }
        }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(
            format!("io {:?}", err).as_str(), None)
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl From<quick_xml::Error> for LibraryError {
    fn from(err: quick_xml::Error) -> Self {
        LibraryError::serialization(
            format!("xml writing {}", err).as_str())
    }
}

impl From<std::string::FromUtf8Error> for LibraryError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        LibraryError::serialization(
            format!("xml encoding {}", err).as_str())
    }
}

/// A specialized Result type for the library services and repositories.
pub type LibraryResult<T> = Result<T, LibraryError>;

// BookOrder defines how a filtered book selection is arranged before pagination
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum BookOrder {
    #[default]
    ByLastAdding,
    ByName,
    ByPrice,
}

impl FromStr for BookOrder {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ByLastAdding" => Ok(BookOrder::ByLastAdding),
            "ByName" => Ok(BookOrder::ByName),
            "ByPrice" => Ok(BookOrder::ByPrice),
            other => Err(LibraryError::invalid_filter(
                format!("unknown book order {:?}", other).as_str())),
        }
    }
}

impl Display for BookOrder {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookOrder::ByLastAdding => write!(f, "ByLastAdding"),
            BookOrder::ByName => write!(f, "ByName"),
            BookOrder::ByPrice => write!(f, "ByPrice"),
        }
    }
}
