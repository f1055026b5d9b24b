//! Domain Models - The vocabulary of the scrum board
//!
//! These types represent the "Ubiquitous Language" of the team.
//! Every name here should match how we talk about the work.

/// Declares an opaque, store-assigned entity identifier.
///
/// Identifiers are handed out by the repository on insert and only
/// compared by equality (and ordered, since the store hands them out
/// in persistence order).
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(u64);

        impl $name {
            pub fn new(value: u64) -> Self {
                Self(value)
            }

            pub fn value(&self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

pub mod backlog;
pub mod sprint;
pub mod user;
