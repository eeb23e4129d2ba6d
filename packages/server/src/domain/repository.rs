//! Room Store interface.
//!
//! ドメイン層が必要とするデータアクセスのインターフェース。
//! 具体的な実装は Infrastructure 層が提供する（依存性の逆転）。

use async_trait::async_trait;

use super::{
    entity::Room,
    error::RepositoryError,
    value_object::{RoomId, Username},
};

/// Authoritative registry of rooms and their message history.
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Create an empty room. Creating an existing room is rejected, never merged.
    async fn create(&self, room_id: RoomId) -> Result<(), RepositoryError>;

    async fn exists(&self, room_id: &RoomId) -> bool;

    /// Append one message to the room's ordered history.
    async fn append_message(&self, room_id: &RoomId, text: String) -> Result<(), RepositoryError>;

    /// Full ordered history of the room.
    async fn history(&self, room_id: &RoomId) -> Result<Vec<String>, RepositoryError>;

    /// Record a username in the room's informational user list.
    async fn add_user(&self, room_id: &RoomId, username: Username) -> Result<(), RepositoryError>;

    /// Snapshot of the whole room entity.
    async fn get_room(&self, room_id: &RoomId) -> Result<Room, RepositoryError>;
}
