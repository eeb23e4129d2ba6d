//! UseCase 層のエラー型

use thiserror::Error;

use crate::domain::{MembershipError, RepositoryError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BroadcastError {
    #[error("room '{0}' not found")]
    RoomNotFound(String),
}

impl From<RepositoryError> for BroadcastError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::AlreadyExists(room) | RepositoryError::NotFound(room) => {
                Self::RoomNotFound(room)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CreateRoomError {
    #[error("room '{0}' already exists")]
    AlreadyExists(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JoinRoomError {
    #[error("room '{0}' not found")]
    RoomNotFound(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OpenSessionError {
    #[error("room '{0}' not found")]
    RoomNotFound(String),

    #[error("failed to register connection: {0}")]
    Registration(String),
}

impl From<MembershipError> for OpenSessionError {
    fn from(err: MembershipError) -> Self {
        match err {
            MembershipError::NotFound(room) => Self::RoomNotFound(room),
            other @ MembershipError::RoomMismatch { .. } => Self::Registration(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendMessageError {
    #[error("room '{0}' not found")]
    RoomNotFound(String),
}

impl From<BroadcastError> for SendMessageError {
    fn from(err: BroadcastError) -> Self {
        match err {
            BroadcastError::RoomNotFound(room) => Self::RoomNotFound(room),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GetRoomDetailError {
    #[error("room '{0}' not found")]
    RoomNotFound(String),
}
