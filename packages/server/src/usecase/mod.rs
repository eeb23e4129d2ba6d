//! UseCase layer.
//!
//! 各ユースケースはドメイン層の trait（`RoomRepository`, `MembershipRegistry`）にのみ依存し、
//! Infrastructure 層の具体的な実装には依存しない。

pub mod broadcast;
pub mod check_room;
pub mod close_session;
pub mod create_room;
pub mod error;
pub mod get_room_detail;
pub mod join_room;
pub mod open_session;
pub mod send_message;

#[cfg(test)]
mod testing;

pub use broadcast::{BroadcastEngine, BroadcastReport};
pub use check_room::CheckRoomUseCase;
pub use close_session::CloseSessionUseCase;
pub use create_room::CreateRoomUseCase;
pub use error::{
    BroadcastError, CreateRoomError, GetRoomDetailError, JoinRoomError, OpenSessionError,
    SendMessageError,
};
pub use get_room_detail::{GetRoomDetailUseCase, RoomDetail};
pub use join_room::JoinRoomUseCase;
pub use open_session::{OpenSessionUseCase, SessionHandle};
pub use send_message::SendMessageUseCase;

/// Notice published when a member opens a session.
pub fn joined_notice(username: &str) -> String {
    format!("{username} has joined the chat")
}

/// Notice published when a member leaves, explicitly or by delivery failure.
pub fn left_notice(username: &str) -> String {
    format!("{username} has left the chat")
}

/// A chat line as recorded in history and broadcast.
pub fn chat_line(username: &str, text: &str) -> String {
    format!("{username}: {text}")
}
