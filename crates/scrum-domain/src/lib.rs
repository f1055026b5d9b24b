//! # Scrum Domain Layer
//!
//! Backlogs, sprints and the rules between them - zero external dependencies.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/     - Entities (Backlog, Sprint, SprintItem, User)  ││
//! │  │  repository/- Trait definitions (not implementations)       ││
//! │  │  service/   - Domain services (SprintPlanner)               ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Golden Rule
//!
//! **This crate has ZERO external dependencies.**
//!
//! If we switch from memory to PostgreSQL, this crate doesn't change.
//! If the HTTP layer is rewritten, this crate doesn't change.

pub mod model;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use model::{
    backlog::{Backlog, BacklogId, BacklogItem, BacklogItemId, NewBacklog, NewBacklogItem},
    sprint::{
        NewSprint, NewSprintItem, Sprint, SprintId, SprintItem, SprintItemError, SprintItemId,
        SprintItemStatus,
    },
    user::{NewUser, User, UserId},
};

pub use repository::{
    backlog_repository::{BacklogItemRepository, BacklogRepository},
    sprint_repository::{SprintItemRepository, SprintRepository},
    user_repository::UserRepository,
    RepositoryError,
};

pub use service::sprint_planner::{
    DeclineReason, PlanningError, Scheduling, SchedulingPolicy, SprintPlanner,
};
