//! Test fixtures shared by the use-case tests.

use std::{sync::Arc, time::Duration};

use tokio::sync::mpsc;

use crate::{
    domain::{RoomId, RoomRepository, Username},
    infrastructure::{
        message_sink::WebSocketSink, registry::InMemoryMembershipRegistry,
        repository::InMemoryRoomRepository,
    },
};

use super::{
    BroadcastEngine, CloseSessionUseCase, OpenSessionUseCase, SendMessageUseCase, SessionHandle,
};

pub struct Services {
    pub repository: Arc<InMemoryRoomRepository>,
    pub registry: Arc<InMemoryMembershipRegistry>,
    pub open_session: OpenSessionUseCase,
    pub send_message: SendMessageUseCase,
    pub close_session: CloseSessionUseCase,
}

impl Services {
    pub fn new() -> Self {
        let repository = Arc::new(InMemoryRoomRepository::new());
        let registry = Arc::new(InMemoryMembershipRegistry::new(repository.clone()));
        let broadcast = Arc::new(BroadcastEngine::new(
            repository.clone(),
            registry.clone(),
            Duration::from_secs(1),
        ));
        Self {
            open_session: OpenSessionUseCase::new(registry.clone(), broadcast.clone()),
            send_message: SendMessageUseCase::new(broadcast.clone()),
            close_session: CloseSessionUseCase::new(registry.clone(), broadcast),
            repository,
            registry,
        }
    }

    pub async fn with_room(name: &str) -> (Self, RoomId) {
        let services = Self::new();
        let room = room_id(name);
        services.repository.create(room.clone()).await.unwrap();
        (services, room)
    }

    /// Open a session backed by a queue and return the queue's receiving end.
    pub async fn open(
        &self,
        room: &RoomId,
        user: &str,
    ) -> (SessionHandle, mpsc::Receiver<String>) {
        let (sink, rx) = WebSocketSink::channel(16);
        let handle = self
            .open_session
            .execute(room.clone(), username(user), Arc::new(sink))
            .await
            .unwrap();
        (handle, rx)
    }

    pub async fn history(&self, room: &RoomId) -> Vec<String> {
        self.repository.history(room).await.unwrap()
    }
}

pub fn room_id(value: &str) -> RoomId {
    RoomId::new(value.to_string()).unwrap()
}

pub fn username(value: &str) -> Username {
    Username::new(value.to_string()).unwrap()
}

/// Drain everything currently queued without waiting.
pub fn drain(rx: &mut mpsc::Receiver<String>) -> Vec<String> {
    let mut messages = Vec::new();
    while let Ok(message) = rx.try_recv() {
        messages.push(message);
    }
    messages
}
