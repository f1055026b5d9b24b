//! # Scrum Adapter Layer
//!
//! External system integrations (Hexagonal Architecture adapters).
//!
//! ## Structure
//!
//! - `repository/` - Persistence implementations

pub mod repository;

pub use repository::in_memory::{
    InMemoryBacklogItemRepository, InMemoryBacklogRepository, InMemorySprintItemRepository,
    InMemorySprintRepository, InMemoryStore, InMemoryUserRepository,
};
