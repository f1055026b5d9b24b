//! Sprint Repositories - Abstract persistence for Sprints and SprintItems

use crate::model::backlog::BacklogId;
use crate::model::sprint::{NewSprint, NewSprintItem, Sprint, SprintId, SprintItem, SprintItemId};
use crate::repository::RepositoryError;

/// Sprint Repository Trait
///
/// This is a PORT in hexagonal architecture.
pub trait SprintRepository {
    /// Persist a new sprint, assigning its id
    fn insert(&mut self, sprint: NewSprint) -> Result<Sprint, RepositoryError>;

    /// Overwrite an existing sprint
    fn save(&mut self, sprint: &Sprint) -> Result<(), RepositoryError>;

    /// Find a sprint by ID
    fn find_by_id(&self, id: SprintId) -> Result<Option<Sprint>, RepositoryError>;

    /// All sprints, in persistence order
    fn find_all(&self) -> Result<Vec<Sprint>, RepositoryError>;

    /// Sprints scheduled from one backlog
    fn find_by_backlog(&self, backlog_id: BacklogId) -> Result<Vec<Sprint>, RepositoryError> {
        Ok(self
            .find_all()?
            .into_iter()
            .filter(|s| s.backlog_id() == backlog_id)
            .collect())
    }
}

/// Sprint Item Repository Trait
pub trait SprintItemRepository {
    /// Persist a new sprint item, assigning its id
    fn insert(&mut self, item: NewSprintItem) -> Result<SprintItem, RepositoryError>;

    /// Overwrite an existing sprint item
    fn save(&mut self, item: &SprintItem) -> Result<(), RepositoryError>;

    /// Find a sprint item by ID
    fn find_by_id(&self, id: SprintItemId) -> Result<Option<SprintItem>, RepositoryError>;

    /// All sprint items, in persistence order
    fn find_all(&self) -> Result<Vec<SprintItem>, RepositoryError>;

    /// Items owned by one sprint, in persistence order
    fn find_by_sprint(&self, sprint_id: SprintId) -> Result<Vec<SprintItem>, RepositoryError> {
        Ok(self
            .find_all()?
            .into_iter()
            .filter(|item| item.belongs_to(sprint_id))
            .collect())
    }
}
