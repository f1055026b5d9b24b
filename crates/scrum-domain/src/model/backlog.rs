//! Backlog - The pile of work nobody has scheduled yet
//!
//! A Backlog is an Entity that owns its BacklogItems.
//! Ownership is by identifier: every item carries the id of its backlog,
//! so there is no object graph to keep consistent.

entity_id!(
    /// Unique identifier for a Backlog
    BacklogId
);

entity_id!(
    /// Unique identifier for a BacklogItem
    BacklogItemId
);

/// Backlog - Container of candidate work items for a project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Backlog {
    id: BacklogId,
}

impl Backlog {
    pub fn id(&self) -> BacklogId {
        self.id
    }
}

/// An empty backlog that hasn't been persisted yet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewBacklog;

impl NewBacklog {
    pub fn new() -> Self {
        Self
    }

    /// Turn the draft into an entity once the store assigned an id
    pub fn with_id(self, id: BacklogId) -> Backlog {
        Backlog { id }
    }
}

/// BacklogItem - A unit of proposed work
///
/// Immutable once created. The only way it changes the world is by
/// being committed into a sprint, which takes a snapshot of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BacklogItem {
    id: BacklogItemId,
    backlog_id: BacklogId,
    title: String,
    description: String,
}

impl BacklogItem {
    pub fn id(&self) -> BacklogItemId {
        self.id
    }

    pub fn backlog_id(&self) -> BacklogId {
        self.backlog_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether this item is owned by the given backlog
    pub fn belongs_to(&self, backlog_id: BacklogId) -> bool {
        self.backlog_id == backlog_id
    }
}

/// A backlog item that hasn't been persisted yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBacklogItem {
    pub backlog_id: BacklogId,
    pub title: String,
    pub description: String,
}

impl NewBacklogItem {
    pub fn new(
        backlog_id: BacklogId,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            backlog_id,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn with_id(self, id: BacklogItemId) -> BacklogItem {
        BacklogItem {
            id,
            backlog_id: self.backlog_id,
            title: self.title,
            description: self.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_from_draft() {
        let item = NewBacklogItem::new(BacklogId::new(1), "bug", "fix me")
            .with_id(BacklogItemId::new(7));

        assert_eq!(item.id(), BacklogItemId::new(7));
        assert_eq!(item.title(), "bug");
        assert_eq!(item.description(), "fix me");
        assert!(item.belongs_to(BacklogId::new(1)));
        assert!(!item.belongs_to(BacklogId::new(2)));
    }

    #[test]
    fn test_id_display() {
        assert_eq!(BacklogId::new(42).to_string(), "42");
        assert_eq!(BacklogItemId::from(3).value(), 3);
    }
}
