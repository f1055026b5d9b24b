//! User directory use-case service.

use scrum_domain::{NewUser, User, UserId, UserRepository};
use tracing::info;

use crate::error::{Result, ServiceError};

/// Registers and lists the users sprint items can be assigned to.
#[derive(Debug, Clone)]
pub struct UserService<U> {
    users: U,
}

impl<U: UserRepository> UserService<U> {
    pub fn new(users: U) -> Self {
        Self { users }
    }

    pub fn register_user(&mut self, name: Option<String>) -> Result<User> {
        let draft = match name {
            Some(name) => NewUser::named(name),
            None => NewUser::new(),
        };
        let user = self.users.insert(draft)?;
        info!(user_id = %user.id(), name = user.name().unwrap_or(""), "User registered");
        Ok(user)
    }

    pub fn all_users(&self) -> Result<Vec<User>> {
        Ok(self.users.find_all()?)
    }

    pub fn user(&self, user_id: UserId) -> Result<User> {
        self.users
            .find_by_id(user_id)?
            .ok_or_else(|| ServiceError::not_found("User", user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrum_adapter::InMemoryUserRepository;

    #[test]
    fn test_register_and_list_users() {
        let mut service = UserService::new(InMemoryUserRepository::new());

        let anonymous = service.register_user(None).unwrap();
        let alice = service.register_user(Some("alice".to_string())).unwrap();

        assert_eq!(anonymous.name(), None);
        assert_eq!(service.user(alice.id()).unwrap().name(), Some("alice"));
        assert_eq!(service.all_users().unwrap(), vec![anonymous, alice]);
    }

    #[test]
    fn test_unknown_user() {
        let service = UserService::new(InMemoryUserRepository::new());

        let err = service.user(UserId::new(1)).unwrap_err();
        assert!(err.is_not_found());
    }
}
