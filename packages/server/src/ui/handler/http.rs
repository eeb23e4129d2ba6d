//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::{
    domain::{RoomId, Username},
    infrastructure::dto::http::{
        ErrorResponse, JoinRoomRequest, MessageResponse, RoomCreatedResponse, RoomDetailDto,
        RoomExistsResponse, RoomQuery,
    },
    ui::state::AppState,
    usecase::{CreateRoomError, GetRoomDetailError, JoinRoomError},
};

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, error: impl Into<String>) -> ApiError {
    (status, Json(ErrorResponse::new(error)))
}

/// `POST /create_room/?room_id=...`
pub async fn create_room(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RoomQuery>,
) -> Result<Json<RoomCreatedResponse>, ApiError> {
    let room_id = RoomId::try_from(query.room_id).map_err(|e| {
        tracing::warn!("Invalid room_id: {}", e);
        api_error(StatusCode::BAD_REQUEST, e.to_string())
    })?;

    match state.create_room_usecase.execute(room_id.clone()).await {
        Ok(()) => Ok(Json(RoomCreatedResponse {
            message: "Room created".to_string(),
            room_id: room_id.to_string(),
        })),
        Err(CreateRoomError::AlreadyExists(room)) => {
            tracing::warn!("Room '{}' already exists", room);
            Err(api_error(StatusCode::CONFLICT, "Room already exists"))
        }
    }
}

/// `POST /join_room/?room_id=...` with `{"username": ...}`
pub async fn join_room(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RoomQuery>,
    Json(request): Json<JoinRoomRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let room_id = RoomId::try_from(query.room_id)
        .map_err(|e| api_error(StatusCode::BAD_REQUEST, e.to_string()))?;
    let username = Username::try_from(request.username)
        .map_err(|e| api_error(StatusCode::BAD_REQUEST, e.to_string()))?;

    let message = format!("{} joined room {}", username, room_id);
    match state.join_room_usecase.execute(&room_id, username).await {
        Ok(()) => Ok(Json(MessageResponse { message })),
        Err(JoinRoomError::RoomNotFound(_)) => {
            Err(api_error(StatusCode::NOT_FOUND, "Room not found"))
        }
    }
}

/// `GET /api/check_room/{room_id}`
///
/// An identifier that fails validation can never exist, so it reports `false`.
pub async fn check_room(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
) -> Json<RoomExistsResponse> {
    let exists = match RoomId::try_from(room_id) {
        Ok(room_id) => state.check_room_usecase.execute(&room_id).await,
        Err(_) => false,
    };
    Json(RoomExistsResponse { exists })
}

/// `GET /api/rooms/{room_id}`
pub async fn get_room_detail(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
) -> Result<Json<RoomDetailDto>, ApiError> {
    let room_id = RoomId::try_from(room_id)
        .map_err(|_| api_error(StatusCode::NOT_FOUND, "Room not found"))?;

    match state.get_room_detail_usecase.execute(&room_id).await {
        Ok(detail) => Ok(Json(detail.into())),
        Err(GetRoomDetailError::RoomNotFound(_)) => {
            Err(api_error(StatusCode::NOT_FOUND, "Room not found"))
        }
    }
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}
