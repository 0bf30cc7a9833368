//! Error types shared across the store.

use std::fmt;
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Which record collection a failed lookup was aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// The user collection.
    User,
    /// The post collection.
    Post,
    /// The comment collection.
    Comment,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::User => write!(f, "user"),
            RecordKind::Post => write!(f, "post"),
            RecordKind::Comment => write!(f, "comment"),
        }
    }
}

/// Errors raised by store mutations. Both variants are terminal for the
/// triggering operation and leave the store unchanged.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// A user with this email already exists.
    #[error("email already taken: {email}")]
    DuplicateEmail {
        /// The rejected email address.
        email: String,
    },
    /// A reference field named a record that does not exist.
    #[error("{record} not found: {id}")]
    NotFound {
        /// The collection the lookup ran against.
        record: RecordKind,
        /// The identifier that failed to resolve.
        id: String,
    },
}
