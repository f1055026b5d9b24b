//! Persistence Adapters - Repository implementations
//!
//! These implement the repository traits from scrum-domain.

pub mod in_memory;

// TODO: Implement persistent storage
// pub mod sqlite;
