//! Membership Registry interface.

use std::sync::Arc;

use async_trait::async_trait;

use super::{entity::MemberConnection, error::MembershipError, value_object::RoomId};

/// Tracks, per room, the live set of member connections.
#[async_trait]
pub trait MembershipRegistry: Send + Sync {
    /// Add `connection` to the room's member set.
    ///
    /// Fails with `NotFound` when the Room Store does not know the room.
    async fn register(
        &self,
        room_id: &RoomId,
        connection: Arc<MemberConnection>,
    ) -> Result<(), MembershipError>;

    /// Remove `connection` from the room's member set.
    ///
    /// Removing an absent connection is a no-op. Returns `true` if the connection was removed by
    /// this call.
    async fn unregister(&self, room_id: &RoomId, connection: &MemberConnection) -> bool;

    /// Copy of the member set at this instant.
    async fn members_of(&self, room_id: &RoomId) -> Vec<Arc<MemberConnection>>;

    async fn member_count(&self, room_id: &RoomId) -> usize;
}
