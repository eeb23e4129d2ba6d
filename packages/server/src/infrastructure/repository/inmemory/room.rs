//! InMemory Room Repository 実装
//!
//! ドメイン層が定義する RoomRepository trait の具体的な実装。
//!
//! ## ロックの粒度
//!
//! ルームの集合は `RwLock<HashMap<..>>`、各ルームの中身はルームごとの `Mutex` で守る。
//! 外側の書き込みロックを取るのはルーム作成時だけなので、別ルームへの追記が
//! お互いを待つことはない。

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use hiroba_shared::time::{Clock, SystemClock};
use tokio::sync::{Mutex, RwLock};

use crate::domain::{RepositoryError, Room, RoomId, RoomRepository, Timestamp, Username};

/// インメモリ Room Repository 実装
pub struct InMemoryRoomRepository {
    rooms: RwLock<HashMap<RoomId, Arc<Mutex<Room>>>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryRoomRepository {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            rooms: RwLock::new(HashMap::new()),
            clock,
        }
    }

    async fn room(&self, room_id: &RoomId) -> Result<Arc<Mutex<Room>>, RepositoryError> {
        self.rooms
            .read()
            .await
            .get(room_id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(room_id.to_string()))
    }
}

impl Default for InMemoryRoomRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn create(&self, room_id: RoomId) -> Result<(), RepositoryError> {
        let mut rooms = self.rooms.write().await;
        if rooms.contains_key(&room_id) {
            return Err(RepositoryError::AlreadyExists(room_id.to_string()));
        }
        let room = Room::new(room_id.clone(), Timestamp::new(self.clock.now_millis()));
        rooms.insert(room_id, Arc::new(Mutex::new(room)));
        Ok(())
    }

    async fn exists(&self, room_id: &RoomId) -> bool {
        self.rooms.read().await.contains_key(room_id)
    }

    async fn append_message(&self, room_id: &RoomId, text: String) -> Result<(), RepositoryError> {
        let room = self.room(room_id).await?;
        room.lock().await.append_message(text);
        Ok(())
    }

    async fn history(&self, room_id: &RoomId) -> Result<Vec<String>, RepositoryError> {
        let room = self.room(room_id).await?;
        let messages = room.lock().await.messages.clone();
        Ok(messages)
    }

    async fn add_user(&self, room_id: &RoomId, username: Username) -> Result<(), RepositoryError> {
        let room = self.room(room_id).await?;
        room.lock().await.add_user(username);
        Ok(())
    }

    async fn get_room(&self, room_id: &RoomId) -> Result<Room, RepositoryError> {
        let room = self.room(room_id).await?;
        let snapshot = room.lock().await.clone();
        Ok(snapshot)
    }
}
