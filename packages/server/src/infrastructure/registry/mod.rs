//! Membership Registry implementations.

mod inmemory;

pub use inmemory::InMemoryMembershipRegistry;
