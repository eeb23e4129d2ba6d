//! Request handlers.

mod http;
mod websocket;

pub use http::{check_room, create_room, get_room_detail, health_check, join_room};
pub use websocket::websocket_handler;
