//! In-Memory Repository Implementations
//!
//! Simple in-memory implementations of repository traits.
//! Useful for testing and development.
//!
//! Every repository is a cheap `Clone` handle over shared state, so the
//! same store can be handed to several services at once.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use scrum_domain::model::backlog::{
    Backlog, BacklogId, BacklogItem, BacklogItemId, NewBacklog, NewBacklogItem,
};
use scrum_domain::model::sprint::{
    NewSprint, NewSprintItem, Sprint, SprintId, SprintItem, SprintItemId,
};
use scrum_domain::model::user::{NewUser, User, UserId};
use scrum_domain::repository::backlog_repository::{BacklogItemRepository, BacklogRepository};
use scrum_domain::repository::sprint_repository::{SprintItemRepository, SprintRepository};
use scrum_domain::repository::user_repository::UserRepository;
use scrum_domain::repository::RepositoryError;

#[derive(Debug)]
struct TableState<T> {
    /// Last id handed out; ids start at 1
    last_id: u64,
    /// Keyed by id, so iteration follows insertion order
    rows: BTreeMap<u64, T>,
}

impl<T> Default for TableState<T> {
    fn default() -> Self {
        Self {
            last_id: 0,
            rows: BTreeMap::new(),
        }
    }
}

/// One entity table with its own id sequence
///
/// Thread-safe implementation using RwLock.
#[derive(Debug)]
struct Table<T> {
    entity: &'static str,
    state: Arc<RwLock<TableState<T>>>,
}

impl<T> Clone for Table<T> {
    fn clone(&self) -> Self {
        Self {
            entity: self.entity,
            state: Arc::clone(&self.state),
        }
    }
}

impl<T: Clone> Table<T> {
    fn new(entity: &'static str) -> Self {
        Self {
            entity,
            state: Arc::new(RwLock::new(TableState::default())),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, TableState<T>>, RepositoryError> {
        self.state.read().map_err(|_| RepositoryError::PersistenceError {
            message: "Failed to acquire read lock".to_string(),
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, TableState<T>>, RepositoryError> {
        self.state.write().map_err(|_| RepositoryError::PersistenceError {
            message: "Failed to acquire write lock".to_string(),
        })
    }

    /// Assign the next id and store the row built from it
    fn insert(&self, build: impl FnOnce(u64) -> T) -> Result<T, RepositoryError> {
        let mut state = self.write()?;
        state.last_id += 1;
        let id = state.last_id;
        let row = build(id);
        state.rows.insert(id, row.clone());
        Ok(row)
    }

    /// Overwrite a row that was inserted before
    fn update(&self, id: u64, row: &T) -> Result<(), RepositoryError> {
        let mut state = self.write()?;
        match state.rows.get_mut(&id) {
            Some(slot) => {
                *slot = row.clone();
                Ok(())
            }
            None => Err(RepositoryError::not_found(self.entity, id)),
        }
    }

    fn get(&self, id: u64) -> Result<Option<T>, RepositoryError> {
        Ok(self.read()?.rows.get(&id).cloned())
    }

    fn all(&self) -> Result<Vec<T>, RepositoryError> {
        Ok(self.read()?.rows.values().cloned().collect())
    }

    fn len(&self) -> Result<usize, RepositoryError> {
        Ok(self.read()?.rows.len())
    }
}

/// In-memory Backlog Repository
#[derive(Debug, Clone)]
pub struct InMemoryBacklogRepository {
    backlogs: Table<Backlog>,
}

impl InMemoryBacklogRepository {
    pub fn new() -> Self {
        Self {
            backlogs: Table::new("Backlog"),
        }
    }
}

impl Default for InMemoryBacklogRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl BacklogRepository for InMemoryBacklogRepository {
    fn insert(&mut self, backlog: NewBacklog) -> Result<Backlog, RepositoryError> {
        self.backlogs.insert(|id| backlog.with_id(BacklogId::new(id)))
    }

    fn find_by_id(&self, id: BacklogId) -> Result<Option<Backlog>, RepositoryError> {
        self.backlogs.get(id.value())
    }

    fn find_all(&self) -> Result<Vec<Backlog>, RepositoryError> {
        self.backlogs.all()
    }
}

/// In-memory Backlog Item Repository
#[derive(Debug, Clone)]
pub struct InMemoryBacklogItemRepository {
    items: Table<BacklogItem>,
}

impl InMemoryBacklogItemRepository {
    pub fn new() -> Self {
        Self {
            items: Table::new("Backlog item"),
        }
    }
}

impl Default for InMemoryBacklogItemRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl BacklogItemRepository for InMemoryBacklogItemRepository {
    fn insert(&mut self, item: NewBacklogItem) -> Result<BacklogItem, RepositoryError> {
        self.items.insert(|id| item.with_id(BacklogItemId::new(id)))
    }

    fn find_by_id(&self, id: BacklogItemId) -> Result<Option<BacklogItem>, RepositoryError> {
        self.items.get(id.value())
    }

    fn find_all(&self) -> Result<Vec<BacklogItem>, RepositoryError> {
        self.items.all()
    }

    fn count(&self) -> Result<usize, RepositoryError> {
        self.items.len()
    }
}

/// In-memory Sprint Repository
#[derive(Debug, Clone)]
pub struct InMemorySprintRepository {
    sprints: Table<Sprint>,
}

impl InMemorySprintRepository {
    pub fn new() -> Self {
        Self {
            sprints: Table::new("Sprint"),
        }
    }
}

impl Default for InMemorySprintRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl SprintRepository for InMemorySprintRepository {
    fn insert(&mut self, sprint: NewSprint) -> Result<Sprint, RepositoryError> {
        self.sprints.insert(|id| sprint.with_id(SprintId::new(id)))
    }

    fn save(&mut self, sprint: &Sprint) -> Result<(), RepositoryError> {
        self.sprints.update(sprint.id().value(), sprint)
    }

    fn find_by_id(&self, id: SprintId) -> Result<Option<Sprint>, RepositoryError> {
        self.sprints.get(id.value())
    }

    fn find_all(&self) -> Result<Vec<Sprint>, RepositoryError> {
        self.sprints.all()
    }
}

/// In-memory Sprint Item Repository
#[derive(Debug, Clone)]
pub struct InMemorySprintItemRepository {
    items: Table<SprintItem>,
}

impl InMemorySprintItemRepository {
    pub fn new() -> Self {
        Self {
            items: Table::new("Sprint item"),
        }
    }
}

impl Default for InMemorySprintItemRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl SprintItemRepository for InMemorySprintItemRepository {
    fn insert(&mut self, item: NewSprintItem) -> Result<SprintItem, RepositoryError> {
        self.items.insert(|id| item.with_id(SprintItemId::new(id)))
    }

    fn save(&mut self, item: &SprintItem) -> Result<(), RepositoryError> {
        self.items.update(item.id().value(), item)
    }

    fn find_by_id(&self, id: SprintItemId) -> Result<Option<SprintItem>, RepositoryError> {
        self.items.get(id.value())
    }

    fn find_all(&self) -> Result<Vec<SprintItem>, RepositoryError> {
        self.items.all()
    }
}

/// In-memory User Repository
#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    users: Table<User>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Table::new("User"),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl UserRepository for InMemoryUserRepository {
    fn insert(&mut self, user: NewUser) -> Result<User, RepositoryError> {
        self.users.insert(|id| user.with_id(UserId::new(id)))
    }

    fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        self.users.get(id.value())
    }

    fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
        self.users.all()
    }
}

/// All in-memory repositories of one scrum board
///
/// Cloning the store clones the handles, not the data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    pub backlogs: InMemoryBacklogRepository,
    pub backlog_items: InMemoryBacklogItemRepository,
    pub sprints: InMemorySprintRepository,
    pub sprint_items: InMemorySprintItemRepository,
    pub users: InMemoryUserRepository,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_follow_insertion_order() {
        let mut repo = InMemoryBacklogRepository::new();

        let first = repo.insert(NewBacklog::new()).unwrap();
        let second = repo.insert(NewBacklog::new()).unwrap();
        assert_eq!(first.id(), BacklogId::new(1));
        assert_eq!(second.id(), BacklogId::new(2));

        let all = repo.find_all().unwrap();
        assert_eq!(all, vec![first, second]);
    }

    #[test]
    fn test_each_table_has_its_own_sequence() {
        let mut store = InMemoryStore::new();

        let backlog = store.backlogs.insert(NewBacklog::new()).unwrap();
        let user = store.users.insert(NewUser::new()).unwrap();

        assert_eq!(backlog.id().value(), 1);
        assert_eq!(user.id().value(), 1);
    }

    #[test]
    fn test_backlog_items_by_backlog() {
        let mut repo = InMemoryBacklogItemRepository::new();
        let mine = BacklogId::new(1);

        repo.insert(NewBacklogItem::new(mine, "bug", "fix me")).unwrap();
        repo.insert(NewBacklogItem::new(BacklogId::new(2), "other", ""))
            .unwrap();

        let items = repo.find_by_backlog(mine).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title(), "bug");
        assert_eq!(repo.count().unwrap(), 2);
    }

    #[test]
    fn test_sprint_save_overwrites() {
        let mut repo = InMemorySprintRepository::new();

        let sprint = repo.insert(NewSprint::new(BacklogId::new(1))).unwrap();
        repo.save(&sprint.clone().confirm()).unwrap();

        let found = repo.find_by_id(sprint.id()).unwrap().unwrap();
        assert!(found.is_confirmed());
        assert_eq!(repo.find_all().unwrap().len(), 1);
    }

    #[test]
    fn test_save_unknown_entity_is_not_found() {
        let mut inserted = InMemorySprintRepository::new();
        let sprint = inserted.insert(NewSprint::new(BacklogId::new(1))).unwrap();

        let mut empty = InMemorySprintRepository::new();
        let result = empty.save(&sprint);
        assert_eq!(
            result,
            Err(RepositoryError::NotFound {
                entity: "Sprint",
                id: "1".to_string(),
            })
        );
    }

    #[test]
    fn test_clones_share_state() {
        let mut repo = InMemorySprintItemRepository::new();
        let reader = repo.clone();

        let item = repo
            .insert(NewSprintItem {
                sprint_id: SprintId::new(1),
                origin: BacklogItemId::new(1),
                title: "bug".to_string(),
                description: "fix me".to_string(),
            })
            .unwrap();

        assert_eq!(reader.find_by_id(item.id()).unwrap(), Some(item.clone()));
        assert_eq!(reader.find_by_sprint(SprintId::new(1)).unwrap(), vec![item]);
        assert!(reader.find_by_sprint(SprintId::new(2)).unwrap().is_empty());
    }

    #[test]
    fn test_user_repository() {
        let mut repo = InMemoryUserRepository::new();

        let alice = repo.insert(NewUser::named("alice")).unwrap();
        assert_eq!(alice.name(), Some("alice"));
        assert!(repo.exists(alice.id()).unwrap());
        assert!(!repo.exists(UserId::new(99)).unwrap());
    }
}
