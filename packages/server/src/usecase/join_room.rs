//! UseCase: ルーム参加（ユーザーリストへの記録）
//!
//! ライブ接続は開かない。接続は `OpenSessionUseCase` が扱う。

use std::sync::Arc;

use crate::domain::{RepositoryError, RoomId, RoomRepository, Username};

use super::error::JoinRoomError;

pub struct JoinRoomUseCase {
    repository: Arc<dyn RoomRepository>,
}

impl JoinRoomUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, room_id: &RoomId, username: Username) -> Result<(), JoinRoomError> {
        let name = username.to_string();
        self.repository
            .add_user(room_id, username)
            .await
            .map_err(|err| match err {
                RepositoryError::NotFound(room) | RepositoryError::AlreadyExists(room) => {
                    JoinRoomError::RoomNotFound(room)
                }
            })?;
        tracing::info!("'{}' joined room '{}'", name, room_id);
        Ok(())
    }
}
