//! # Scrum Use Case Layer
//!
//! Application-specific business rules.
//! This layer orchestrates the flow of data between the domain and adapters:
//! load entities through the ports, apply the domain transition, store the
//! result.

pub mod backlog_service;
pub mod error;
pub mod sprint_service;
pub mod user_service;

pub use scrum_domain;

pub use backlog_service::BacklogService;
pub use error::{Result, ServiceError};
pub use sprint_service::SprintService;
pub use user_service::UserService;
