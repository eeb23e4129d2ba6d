//! UseCase: セッション開始
//!
//! ライブ接続を Membership Registry に登録し、ルームに参加通知を流す。
//! 過去の履歴は新しい参加者に再送しない。

use std::sync::Arc;

use crate::domain::{
    ConnectionId, MemberConnection, MembershipRegistry, MessageSink, RoomId, Username,
};

use super::{BroadcastEngine, error::OpenSessionError, joined_notice};

/// Transient handle the session handler holds while its connection is open.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    connection: Arc<MemberConnection>,
}

impl SessionHandle {
    pub fn new(connection: Arc<MemberConnection>) -> Self {
        Self { connection }
    }

    pub fn connection_id(&self) -> ConnectionId {
        self.connection.id
    }

    pub fn room_id(&self) -> &RoomId {
        &self.connection.room_id
    }

    pub fn username(&self) -> &Username {
        &self.connection.username
    }

    pub fn connection(&self) -> &MemberConnection {
        &self.connection
    }
}

pub struct OpenSessionUseCase {
    registry: Arc<dyn MembershipRegistry>,
    broadcast: Arc<BroadcastEngine>,
}

impl OpenSessionUseCase {
    pub fn new(registry: Arc<dyn MembershipRegistry>, broadcast: Arc<BroadcastEngine>) -> Self {
        Self {
            registry,
            broadcast,
        }
    }

    /// Register a live member and announce it to the room.
    ///
    /// # Errors
    ///
    /// `RoomNotFound` when the room was never created.
    pub async fn execute(
        &self,
        room_id: RoomId,
        username: Username,
        sink: Arc<dyn MessageSink>,
    ) -> Result<SessionHandle, OpenSessionError> {
        let connection = Arc::new(MemberConnection::new(room_id.clone(), username, sink));
        self.registry.register(&room_id, connection.clone()).await?;

        let handle = SessionHandle::new(connection);
        tracing::info!(
            "Session '{}' opened for '{}' in room '{}'",
            handle.connection_id(),
            handle.username(),
            room_id
        );

        if let Err(e) = self
            .broadcast
            .publish(&room_id, joined_notice(handle.username().as_str()))
            .await
        {
            tracing::warn!("Failed to announce '{}': {}", handle.username(), e);
        }

        Ok(handle)
    }
}
