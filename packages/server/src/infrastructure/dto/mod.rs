//! Data Transfer Objects (DTOs) for the HTTP API.
//!
//! WebSocket frames carry plain text and need no DTOs.

pub mod http;
