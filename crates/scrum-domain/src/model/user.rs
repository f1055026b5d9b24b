//! User - Someone who can pick up sprint items
//!
//! Users have no business rules of their own here. They only exist so a
//! sprint item can point at whoever is working on it.

entity_id!(
    /// Unique identifier for a User
    UserId
);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: Option<String>,
}

impl User {
    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// A user that hasn't been persisted yet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewUser {
    pub name: Option<String>,
}

impl NewUser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    pub fn with_id(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
        }
    }
}
