//! User Repository - The user directory as seen by the domain

use crate::model::user::{NewUser, User, UserId};
use crate::repository::RepositoryError;

/// User Repository Trait
pub trait UserRepository {
    /// Register a new user, assigning its id
    fn insert(&mut self, user: NewUser) -> Result<User, RepositoryError>;

    /// Find a user by ID
    fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError>;

    /// All users, in registration order
    fn find_all(&self) -> Result<Vec<User>, RepositoryError>;

    /// Check if a user exists
    fn exists(&self, id: UserId) -> Result<bool, RepositoryError> {
        Ok(self.find_by_id(id)?.is_some())
    }
}
