//! UseCase: ルーム存在確認

use std::sync::Arc;

use crate::domain::{RoomId, RoomRepository};

pub struct CheckRoomUseCase {
    repository: Arc<dyn RoomRepository>,
}

impl CheckRoomUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, room_id: &RoomId) -> bool {
        self.repository.exists(room_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::repository::InMemoryRoomRepository;

    #[tokio::test]
    async fn test_check_room() {
        // テスト項目: 作成済みのルームだけが存在すると判定される
        // given (前提条件):
        let repository = Arc::new(InMemoryRoomRepository::new());
        let lobby = RoomId::new("lobby".to_string()).unwrap();
        repository.create(lobby.clone()).await.unwrap();
        let usecase = CheckRoomUseCase::new(repository);

        // when (操作) / then (期待する結果):
        assert!(usecase.execute(&lobby).await);
        assert!(
            !usecase
                .execute(&RoomId::new("ghost".to_string()).unwrap())
                .await
        );
    }
}
