//! Domain errors.

use thiserror::Error;

/// Value object validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("{field} is too long (max {max} characters, got {actual})")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("{0} must not contain '/'")]
    InvalidCharacter(&'static str),
}

/// Room Store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("room '{0}' already exists")]
    AlreadyExists(String),

    #[error("room '{0}' not found")]
    NotFound(String),
}

/// Membership Registry errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MembershipError {
    #[error("room '{0}' not found")]
    NotFound(String),

    /// The connection is bound to a different room than the one it was registered to.
    #[error("connection belongs to room '{connection_room}', not '{target_room}'")]
    RoomMismatch {
        connection_room: String,
        target_room: String,
    },
}
