//! In-memory Membership Registry
//!
//! ルームごとのメンバー集合を `DashMap` で保持する。DashMap はシャード単位でロックするため、
//! 無関係なルームへの join / leave が 1 つのグローバルロックで直列化されることはない。
//!
//! どのメソッドもシャードのガードを `.await` をまたいで保持しない。

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::{
    ConnectionId, MemberConnection, MembershipError, MembershipRegistry, RoomId, RoomRepository,
};

type MemberSet = HashMap<ConnectionId, Arc<MemberConnection>>;

pub struct InMemoryMembershipRegistry {
    /// Used only to check room existence on register
    repository: Arc<dyn RoomRepository>,
    /// Rooms with at least one live member
    members: DashMap<RoomId, MemberSet>,
}

impl InMemoryMembershipRegistry {
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self {
            repository,
            members: DashMap::new(),
        }
    }

    /// Number of rooms that currently have a registry entry.
    pub fn active_room_count(&self) -> usize {
        self.members.len()
    }
}

#[async_trait]
impl MembershipRegistry for InMemoryMembershipRegistry {
    async fn register(
        &self,
        room_id: &RoomId,
        connection: Arc<MemberConnection>,
    ) -> Result<(), MembershipError> {
        if &connection.room_id != room_id {
            return Err(MembershipError::RoomMismatch {
                connection_room: connection.room_id.to_string(),
                target_room: room_id.to_string(),
            });
        }
        if !self.repository.exists(room_id).await {
            return Err(MembershipError::NotFound(room_id.to_string()));
        }

        let connection_id = connection.id;
        self.members
            .entry(room_id.clone())
            .or_default()
            .insert(connection_id, connection);
        tracing::debug!("Connection '{}' registered to room '{}'", connection_id, room_id);
        Ok(())
    }

    async fn unregister(&self, room_id: &RoomId, connection: &MemberConnection) -> bool {
        let removed = match self.members.get_mut(room_id) {
            Some(mut set) => set.remove(&connection.id).is_some(),
            None => false,
        };
        // The shard guard above is released before this call.
        self.members.remove_if(room_id, |_, set| set.is_empty());

        if removed {
            tracing::debug!(
                "Connection '{}' unregistered from room '{}'",
                connection.id,
                room_id
            );
        }
        removed
    }

    async fn members_of(&self, room_id: &RoomId) -> Vec<Arc<MemberConnection>> {
        self.members
            .get(room_id)
            .map(|set| set.values().cloned().collect())
            .unwrap_or_default()
    }

    async fn member_count(&self, room_id: &RoomId) -> usize {
        self.members.get(room_id).map(|set| set.len()).unwrap_or(0)
    }
}
