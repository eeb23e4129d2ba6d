//! Domain layer.
//!
//! Entities, value objects and the interfaces (traits) that the use-case layer depends on.
//! Concrete implementations live in the infrastructure layer.

pub mod entity;
pub mod error;
pub mod message_sink;
pub mod registry;
pub mod repository;
pub mod value_object;

pub use entity::{MemberConnection, Room};
pub use error::{MembershipError, RepositoryError, ValueObjectError};
pub use message_sink::{Delivery, DeliveryFailure, MessageSink};
#[cfg(test)]
pub use message_sink::MockMessageSink;
pub use registry::MembershipRegistry;
pub use repository::RoomRepository;
pub use value_object::{ConnectionId, RoomId, Timestamp, Username};
