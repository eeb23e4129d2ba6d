//! HTTP API request / response DTOs.

use hiroba_shared::time::millis_to_rfc3339;
use serde::{Deserialize, Serialize};

use crate::usecase::RoomDetail;

/// `?room_id=...` query of the create / join endpoints
#[derive(Debug, Deserialize)]
pub struct RoomQuery {
    pub room_id: String,
}

/// Body of `POST /join_room/`
#[derive(Debug, Deserialize, Serialize)]
pub struct JoinRoomRequest {
    pub username: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoomCreatedResponse {
    pub message: String,
    pub room_id: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoomExistsResponse {
    pub exists: bool,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoomDetailDto {
    pub room_id: String,
    pub users: Vec<String>,
    pub messages: Vec<String>,
    pub active_members: usize,
    /// RFC 3339 (UTC)
    pub created_at: String,
}

impl From<RoomDetail> for RoomDetailDto {
    fn from(detail: RoomDetail) -> Self {
        let room = detail.room;
        Self {
            room_id: room.id.to_string(),
            users: room.users.iter().map(|user| user.to_string()).collect(),
            messages: room.messages,
            active_members: detail.active_members,
            created_at: millis_to_rfc3339(room.created_at.value()),
        }
    }
}
