//! Backlog use-case service.
//!
//! Creates backlogs and fills them with backlog items. Items come back in
//! the order they were added.

use scrum_domain::{
    Backlog, BacklogId, BacklogItem, BacklogItemId, BacklogItemRepository, BacklogRepository,
    NewBacklog, NewBacklogItem,
};
use tracing::{debug, info};

use crate::error::{Result, ServiceError};

/// Backlog service facade over repository implementations.
#[derive(Debug, Clone)]
pub struct BacklogService<B, I> {
    backlogs: B,
    items: I,
}

impl<B, I> BacklogService<B, I>
where
    B: BacklogRepository,
    I: BacklogItemRepository,
{
    pub fn new(backlogs: B, items: I) -> Self {
        Self { backlogs, items }
    }

    /// Creates and persists a new, empty backlog.
    pub fn create_backlog(&mut self) -> Result<Backlog> {
        let backlog = self.backlogs.insert(NewBacklog::new())?;
        info!(backlog_id = %backlog.id(), "Backlog created");
        Ok(backlog)
    }

    /// Adds one item to an existing backlog.
    pub fn add_item(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        backlog_id: BacklogId,
    ) -> Result<BacklogItem> {
        let backlog = self.backlog(backlog_id)?;
        let item = self
            .items
            .insert(NewBacklogItem::new(backlog.id(), title, description))?;
        info!(
            backlog_id = %backlog.id(),
            backlog_item_id = %item.id(),
            title = item.title(),
            "Backlog item added"
        );
        Ok(item)
    }

    /// Items of one backlog, in the order they were added.
    pub fn all_items(&self, backlog_id: BacklogId) -> Result<Vec<BacklogItem>> {
        let backlog = self.backlog(backlog_id)?;
        let items = self.items.find_by_backlog(backlog.id())?;
        debug!(backlog_id = %backlog_id, count = items.len(), "Listed backlog items");
        Ok(items)
    }

    pub fn backlog(&self, backlog_id: BacklogId) -> Result<Backlog> {
        self.backlogs
            .find_by_id(backlog_id)?
            .ok_or_else(|| ServiceError::not_found("Backlog", backlog_id))
    }

    pub fn all_backlogs(&self) -> Result<Vec<Backlog>> {
        Ok(self.backlogs.find_all()?)
    }

    /// One item, only if it is owned by the given backlog.
    pub fn item(&self, backlog_id: BacklogId, item_id: BacklogItemId) -> Result<BacklogItem> {
        self.items
            .find_by_id(item_id)?
            .filter(|item| item.belongs_to(backlog_id))
            .ok_or_else(|| ServiceError::not_found("Backlog item", item_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrum_adapter::{InMemoryBacklogItemRepository, InMemoryBacklogRepository};

    type Service = BacklogService<InMemoryBacklogRepository, InMemoryBacklogItemRepository>;

    fn service() -> Service {
        BacklogService::new(
            InMemoryBacklogRepository::new(),
            InMemoryBacklogItemRepository::new(),
        )
    }

    fn titles(items: &[BacklogItem]) -> Vec<&str> {
        items.iter().map(|i| i.title()).collect()
    }

    #[test]
    fn test_new_backlog_is_empty() {
        let mut service = service();

        let backlog = service.create_backlog().unwrap();
        assert!(service.all_items(backlog.id()).unwrap().is_empty());
        assert_eq!(service.all_backlogs().unwrap(), vec![backlog]);
    }

    #[test]
    fn test_items_come_back_in_insertion_order() {
        let mut service = service();
        let backlog = service.create_backlog().unwrap();

        service.add_item("bug", "fix me", backlog.id()).unwrap();
        service.add_item("feature", "build me", backlog.id()).unwrap();
        service.add_item("chore", "clean me", backlog.id()).unwrap();

        let items = service.all_items(backlog.id()).unwrap();
        assert_eq!(titles(&items), vec!["bug", "feature", "chore"]);
        assert_eq!(items[0].description(), "fix me");
    }

    #[test]
    fn test_items_never_leak_between_backlogs() {
        let mut service = service();
        let first = service.create_backlog().unwrap();
        let second = service.create_backlog().unwrap();

        service.add_item("a", "", first.id()).unwrap();
        service.add_item("b", "", second.id()).unwrap();
        service.add_item("c", "", first.id()).unwrap();

        assert_eq!(titles(&service.all_items(first.id()).unwrap()), vec!["a", "c"]);
        assert_eq!(titles(&service.all_items(second.id()).unwrap()), vec!["b"]);
    }

    #[test]
    fn test_add_item_to_unknown_backlog() {
        let mut service = service();

        let err = service
            .add_item("bug", "fix me", BacklogId::new(404))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_all_items_of_unknown_backlog() {
        let service = service();

        let err = service.all_items(BacklogId::new(404)).unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { entity: "Backlog", .. }));
    }

    #[test]
    fn test_item_is_scoped_to_backlog() {
        let mut service = service();
        let first = service.create_backlog().unwrap();
        let second = service.create_backlog().unwrap();
        let item = service.add_item("bug", "fix me", first.id()).unwrap();

        assert_eq!(service.item(first.id(), item.id()).unwrap(), item);
        assert!(service.item(second.id(), item.id()).unwrap_err().is_not_found());
    }
}
