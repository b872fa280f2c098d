use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq)]
pub enum LibraryError {
    // The book or patron is not part of the library.
    NotFound {
        message: String,
    },
    DuplicateKey {
        message: String,
    },
    // The book exists but is not in the state the operation needs, e.g. checking out a
    // book that is already borrowed or removing one that is checked out.
    CurrentlyUnavailable {
        message: String,
    },
    // The patron is not allowed to act on the book, e.g. returning a book held by someone else.
    NotGranted {
        message: String,
    },
    Validation {
        message: String,
    },
    Serialization {
        message: String,
    },
}

impl LibraryError {
    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn unavailable(message: &str) -> LibraryError {
        LibraryError::CurrentlyUnavailable { message: message.to_string() }
    }

    pub fn not_granted(message: &str) -> LibraryError {
        LibraryError::NotGranted { message: message.to_string() }
    }

    pub fn validation(message: &str) -> LibraryError {
        LibraryError::Validation { message: message.to_string() }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::NotFound { message } => {
                write!(f, "not found: {}", message)
            }
            LibraryError::DuplicateKey { message } => {
                write!(f, "duplicate key: {}", message)
            }
            LibraryError::CurrentlyUnavailable { message } => {
                write!(f, "unavailable: {}", message)
            }
            LibraryError::NotGranted { message } => {
                write!(f, "not granted: {}", message)
            }
            LibraryError::Validation { message } => {
                write!(f, "validation: {}", message)
            }
            LibraryError::Serialization { message } => {
                write!(f, "serialization: {}", message)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for library operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum BookStatus {
    Available,
    CheckedOut,
}

impl Display for BookStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookStatus::Available => write!(f, "Available"),
            BookStatus::CheckedOut => write!(f, "CheckedOut"),
        }
    }
}
