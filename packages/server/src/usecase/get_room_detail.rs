//! UseCase: ルーム詳細取得

use std::sync::Arc;

use crate::domain::{MembershipRegistry, RepositoryError, Room, RoomId, RoomRepository};

use super::error::GetRoomDetailError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomDetail {
    pub room: Room,
    /// Live sessions at the time of the query
    pub active_members: usize,
}

pub struct GetRoomDetailUseCase {
    repository: Arc<dyn RoomRepository>,
    registry: Arc<dyn MembershipRegistry>,
}

impl GetRoomDetailUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>, registry: Arc<dyn MembershipRegistry>) -> Self {
        Self {
            repository,
            registry,
        }
    }

    pub async fn execute(&self, room_id: &RoomId) -> Result<RoomDetail, GetRoomDetailError> {
        let room = self
            .repository
            .get_room(room_id)
            .await
            .map_err(|err| match err {
                RepositoryError::NotFound(room) | RepositoryError::AlreadyExists(room) => {
                    GetRoomDetailError::RoomNotFound(room)
                }
            })?;
        let active_members = self.registry.member_count(room_id).await;
        Ok(RoomDetail {
            room,
            active_members,
        })
    }
}
