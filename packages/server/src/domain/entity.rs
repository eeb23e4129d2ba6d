//! Domain entities.

use std::{fmt, sync::Arc};

use super::{
    message_sink::{Delivery, MessageSink},
    value_object::{ConnectionId, RoomId, Timestamp, Username},
};

/// Chat room
///
/// Lives for the whole process lifetime once created. Only `users` and `messages` grow; no
/// other field changes after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: RoomId,
    /// Usernames recorded by join requests (informational, may contain duplicates)
    pub users: Vec<Username>,
    /// Append-only message history
    pub messages: Vec<String>,
    pub created_at: Timestamp,
}

impl Room {
    pub fn new(id: RoomId, created_at: Timestamp) -> Self {
        Self {
            id,
            users: Vec::new(),
            messages: Vec::new(),
            created_at,
        }
    }

    pub fn add_user(&mut self, username: Username) {
        self.users.push(username);
    }

    pub fn append_message(&mut self, text: String) {
        self.messages.push(text);
    }
}

/// One live session bound to exactly one room.
pub struct MemberConnection {
    pub id: ConnectionId,
    pub room_id: RoomId,
    pub username: Username,
    sink: Arc<dyn MessageSink>,
}

impl MemberConnection {
    pub fn new(room_id: RoomId, username: Username, sink: Arc<dyn MessageSink>) -> Self {
        Self {
            id: ConnectionId::generate(),
            room_id,
            username,
            sink,
        }
    }

    /// Push one message to this member through its send capability.
    pub async fn deliver(&self, message: &str) -> Delivery {
        self.sink.deliver(message).await
    }

    pub async fn close(&self) {
        self.sink.close().await;
    }
}

impl fmt::Debug for MemberConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemberConnection")
            .field("id", &self.id)
            .field("room_id", &self.room_id)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl PartialEq for MemberConnection {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for MemberConnection {}
