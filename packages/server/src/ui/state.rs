//! Shared application state.

use std::sync::Arc;

use crate::{
    config::ServerConfig,
    infrastructure::{registry::InMemoryMembershipRegistry, repository::InMemoryRoomRepository},
    usecase::{
        BroadcastEngine, CheckRoomUseCase, CloseSessionUseCase, CreateRoomUseCase,
        GetRoomDetailUseCase, JoinRoomUseCase, OpenSessionUseCase, SendMessageUseCase,
    },
};

/// Shared application state
pub struct AppState {
    pub create_room_usecase: CreateRoomUseCase,
    pub check_room_usecase: CheckRoomUseCase,
    pub join_room_usecase: JoinRoomUseCase,
    pub get_room_detail_usecase: GetRoomDetailUseCase,
    pub open_session_usecase: OpenSessionUseCase,
    pub send_message_usecase: SendMessageUseCase,
    pub close_session_usecase: CloseSessionUseCase,
    /// Capacity of each session's outbound queue
    pub send_buffer: usize,
}

impl AppState {
    /// Wire the in-memory Room Store, Membership Registry and Broadcast Engine into the use cases.
    ///
    /// Dependencies are created in order:
    /// 1. Repository (Room Store)
    /// 2. Membership Registry
    /// 3. Broadcast Engine
    /// 4. UseCases
    pub fn in_memory(config: &ServerConfig) -> Self {
        let repository = Arc::new(InMemoryRoomRepository::new());
        let registry = Arc::new(InMemoryMembershipRegistry::new(repository.clone()));
        let broadcast = Arc::new(BroadcastEngine::new(
            repository.clone(),
            registry.clone(),
            config.delivery_timeout,
        ));

        Self {
            create_room_usecase: CreateRoomUseCase::new(repository.clone()),
            check_room_usecase: CheckRoomUseCase::new(repository.clone()),
            join_room_usecase: JoinRoomUseCase::new(repository.clone()),
            get_room_detail_usecase: GetRoomDetailUseCase::new(repository, registry.clone()),
            open_session_usecase: OpenSessionUseCase::new(registry.clone(), broadcast.clone()),
            send_message_usecase: SendMessageUseCase::new(broadcast.clone()),
            close_session_usecase: CloseSessionUseCase::new(registry, broadcast),
            send_buffer: config.send_buffer,
        }
    }
}
