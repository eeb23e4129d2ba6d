//! Room-scoped real-time chat server.
//!
//! Clients create named rooms, join them, and exchange text messages that are broadcast to every
//! live member of the same room over WebSocket.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

pub mod config;
