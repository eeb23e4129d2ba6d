//! UseCase: ルーム作成

use std::sync::Arc;

use crate::domain::{RepositoryError, RoomId, RoomRepository};

use super::error::CreateRoomError;

pub struct CreateRoomUseCase {
    repository: Arc<dyn RoomRepository>,
}

impl CreateRoomUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// Create an empty room.
    ///
    /// # Errors
    ///
    /// `AlreadyExists` when the identifier is taken. Creation is deliberately not idempotent.
    pub async fn execute(&self, room_id: RoomId) -> Result<(), CreateRoomError> {
        match self.repository.create(room_id.clone()).await {
            Ok(()) => {
                tracing::info!("Room '{}' created", room_id);
                Ok(())
            }
            Err(RepositoryError::AlreadyExists(room)) | Err(RepositoryError::NotFound(room)) => {
                Err(CreateRoomError::AlreadyExists(room))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::repository::InMemoryRoomRepository;

    #[tokio::test]
    async fn test_create_room_twice() {
        // テスト項目: 同じ ID で 2 回作成すると Created → AlreadyExists になる
        // given (前提条件):
        let repository = Arc::new(InMemoryRoomRepository::new());
        let usecase = CreateRoomUseCase::new(repository.clone());
        let lobby = RoomId::new("lobby".to_string()).unwrap();

        // when (操作):
        let first = usecase.execute(lobby.clone()).await;
        let second = usecase.execute(lobby.clone()).await;

        // then (期待する結果):
        assert_eq!(first, Ok(()));
        assert_eq!(
            second,
            Err(CreateRoomError::AlreadyExists("lobby".to_string()))
        );
        assert!(repository.exists(&lobby).await);
    }
}
