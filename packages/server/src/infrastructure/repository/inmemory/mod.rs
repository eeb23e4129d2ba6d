//! In-memory Room Store.

mod room;

pub use room::InMemoryRoomRepository;
