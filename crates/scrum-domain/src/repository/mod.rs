//! Repository Traits - The "Ports" of Hexagonal Architecture
//!
//! These traits define HOW the domain wants to persist data,
//! but NOT how it's actually done. That's the adapter's job.
//!
//! ```text
//! Domain Layer          │  Adapter Layer
//! ──────────────────────┼────────────────────────
//! trait SprintRepo      │  InMemorySprintRepo
//!   fn insert()         │  SqliteSprintRepo
//!   fn save()           │
//!   fn find_by_id()     │
//!   fn find_all()       │
//! ```
//!
//! Every port follows the same contract:
//! - `insert` persists a draft and assigns the identifier
//! - `save` overwrites an already inserted entity (mutable entities only)
//! - `find_all` returns entities in persistence order

pub mod backlog_repository;
pub mod sprint_repository;
pub mod user_repository;

/// Errors that can occur during repository operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// Entity not found
    NotFound { entity: &'static str, id: String },
    /// Failed to persist
    PersistenceError { message: String },
}

impl RepositoryError {
    pub fn not_found(entity: &'static str, id: impl core::fmt::Display) -> Self {
        RepositoryError::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

impl core::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RepositoryError::NotFound { entity, id } => {
                write!(f, "{} not found: {}", entity, id)
            }
            RepositoryError::PersistenceError { message } => {
                write!(f, "Persistence error: {}", message)
            }
        }
    }
}

impl std::error::Error for RepositoryError {}
