//! Infrastructure layer: concrete implementations of the domain interfaces.

pub mod dto;
pub mod message_sink;
pub mod registry;
pub mod repository;
