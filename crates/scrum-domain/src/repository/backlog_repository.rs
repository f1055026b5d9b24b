//! Backlog Repositories - Abstract persistence for Backlogs and their items

use crate::model::backlog::{
    Backlog, BacklogId, BacklogItem, BacklogItemId, NewBacklog, NewBacklogItem,
};
use crate::repository::RepositoryError;

/// Backlog Repository Trait
///
/// This is a PORT in hexagonal architecture.
/// Backlogs and their items are never edited once created, so neither
/// port has an update operation.
pub trait BacklogRepository {
    /// Persist a new backlog, assigning its id
    fn insert(&mut self, backlog: NewBacklog) -> Result<Backlog, RepositoryError>;

    /// Find a backlog by ID
    fn find_by_id(&self, id: BacklogId) -> Result<Option<Backlog>, RepositoryError>;

    /// All backlogs, in persistence order
    fn find_all(&self) -> Result<Vec<Backlog>, RepositoryError>;

    /// Check if a backlog exists
    fn exists(&self, id: BacklogId) -> Result<bool, RepositoryError> {
        Ok(self.find_by_id(id)?.is_some())
    }
}

/// Backlog Item Repository Trait
pub trait BacklogItemRepository {
    /// Persist a new backlog item, assigning its id
    fn insert(&mut self, item: NewBacklogItem) -> Result<BacklogItem, RepositoryError>;

    /// Find a backlog item by ID
    fn find_by_id(&self, id: BacklogItemId) -> Result<Option<BacklogItem>, RepositoryError>;

    /// All backlog items, in persistence order
    fn find_all(&self) -> Result<Vec<BacklogItem>, RepositoryError>;

    /// Items owned by one backlog, in persistence order
    fn find_by_backlog(&self, backlog_id: BacklogId) -> Result<Vec<BacklogItem>, RepositoryError> {
        Ok(self
            .find_all()?
            .into_iter()
            .filter(|item| item.belongs_to(backlog_id))
            .collect())
    }

    /// Count all backlog items
    fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.find_all()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Vec-backed implementation for testing the default methods
    struct VecBacklogItemRepo {
        items: Vec<BacklogItem>,
    }

    impl BacklogItemRepository for VecBacklogItemRepo {
        fn insert(&mut self, item: NewBacklogItem) -> Result<BacklogItem, RepositoryError> {
            let item = item.with_id(BacklogItemId::new(self.items.len() as u64 + 1));
            self.items.push(item.clone());
            Ok(item)
        }

        fn find_by_id(&self, id: BacklogItemId) -> Result<Option<BacklogItem>, RepositoryError> {
            Ok(self.items.iter().find(|i| i.id() == id).cloned())
        }

        fn find_all(&self) -> Result<Vec<BacklogItem>, RepositoryError> {
            Ok(self.items.clone())
        }
    }

    #[test]
    fn test_find_by_backlog_filters_and_keeps_order() {
        let mut repo = VecBacklogItemRepo { items: Vec::new() };
        let mine = BacklogId::new(1);
        let other = BacklogId::new(2);

        repo.insert(NewBacklogItem::new(mine, "first", "")).unwrap();
        repo.insert(NewBacklogItem::new(other, "foreign", "")).unwrap();
        repo.insert(NewBacklogItem::new(mine, "second", "")).unwrap();

        let titles: Vec<String> = repo
            .find_by_backlog(mine)
            .unwrap()
            .iter()
            .map(|i| i.title().to_string())
            .collect();
        assert_eq!(titles, vec!["first", "second"]);
        assert_eq!(repo.count().unwrap(), 3);
    }
}
