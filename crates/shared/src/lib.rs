//! # Scrum Shared
//!
//! Common configuration types used by the binaries.

pub mod config;
pub mod error;

// Re-exports
pub use config::*;
pub use error::*;
