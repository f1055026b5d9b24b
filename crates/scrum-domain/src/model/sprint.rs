//! Sprint - A time-boxed slice of the backlog
//!
//! A Sprint is scheduled from a Backlog and owns the SprintItems that were
//! committed into it. SprintItems are snapshots of BacklogItems that can be
//! assigned to a user and finished.
//!
//! State transitions are pure: they consume the current value and return
//! the next one. Persisting the result is the caller's job.
//!
//! ```text
//! Sprint:     Scheduled ──confirm──▶ Confirmed
//! SprintItem: Committed ──assign──▶ Assigned ──finish──▶ Finished
//!                                    ▲    │
//!                                    └────┘ reassign
//! ```

use super::backlog::{BacklogId, BacklogItemId};
use super::user::UserId;

entity_id!(
    /// Unique identifier for a Sprint
    SprintId
);

entity_id!(
    /// Unique identifier for a SprintItem
    SprintItemId
);

/// Sprint - Scheduled unit of work drawn from a backlog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprint {
    id: SprintId,
    backlog_id: BacklogId,
    confirmed: bool,
}

impl Sprint {
    pub fn id(&self) -> SprintId {
        self.id
    }

    /// The backlog this sprint was scheduled from
    pub fn backlog_id(&self) -> BacklogId {
        self.backlog_id
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    /// Confirm the sprint
    ///
    /// One-way: there is no transition back to unconfirmed, and confirming
    /// an already confirmed sprint leaves it confirmed.
    pub fn confirm(self) -> Sprint {
        Sprint {
            confirmed: true,
            ..self
        }
    }
}

/// A sprint that hasn't been persisted yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSprint {
    pub backlog_id: BacklogId,
}

impl NewSprint {
    pub fn new(backlog_id: BacklogId) -> Self {
        Self { backlog_id }
    }

    pub fn with_id(self, id: SprintId) -> Sprint {
        Sprint {
            id,
            backlog_id: self.backlog_id,
            confirmed: false,
        }
    }
}

/// Where a SprintItem is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SprintItemStatus {
    /// Committed into the sprint, nobody working on it
    Committed,
    /// Somebody is working on it
    Assigned,
    /// Done
    Finished,
}

impl core::fmt::Display for SprintItemStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SprintItemStatus::Committed => write!(f, "committed"),
            SprintItemStatus::Assigned => write!(f, "assigned"),
            SprintItemStatus::Finished => write!(f, "finished"),
        }
    }
}

/// SprintItem - In-sprint representation of a committed backlog item
///
/// `title` and `description` are copied at commit time and never follow
/// the backlog item afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SprintItem {
    id: SprintItemId,
    sprint_id: SprintId,
    origin: BacklogItemId,
    title: String,
    description: String,
    assigned_user: Option<UserId>,
    finished: bool,
}

impl SprintItem {
    // ========== Getters ==========

    pub fn id(&self) -> SprintItemId {
        self.id
    }

    pub fn sprint_id(&self) -> SprintId {
        self.sprint_id
    }

    /// The backlog item this was committed from
    pub fn origin(&self) -> BacklogItemId {
        self.origin
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn assigned_user(&self) -> Option<UserId> {
        self.assigned_user
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn belongs_to(&self, sprint_id: SprintId) -> bool {
        self.sprint_id == sprint_id
    }

    pub fn status(&self) -> SprintItemStatus {
        match (self.finished, self.assigned_user) {
            (true, _) => SprintItemStatus::Finished,
            (false, Some(_)) => SprintItemStatus::Assigned,
            (false, None) => SprintItemStatus::Committed,
        }
    }

    // ========== State Transitions ==========

    /// Hand the item to a user, replacing any previous assignee
    pub fn assign_to(self, user_id: UserId) -> Result<SprintItem, SprintItemError> {
        match self.status() {
            SprintItemStatus::Committed | SprintItemStatus::Assigned => Ok(SprintItem {
                assigned_user: Some(user_id),
                ..self
            }),
            SprintItemStatus::Finished => Err(SprintItemError::AlreadyFinished { id: self.id }),
        }
    }

    /// Mark the item as done
    ///
    /// Only an assigned item can be finished. Finishing a finished item
    /// leaves it finished.
    pub fn finish(self) -> Result<SprintItem, SprintItemError> {
        match self.status() {
            SprintItemStatus::Assigned => Ok(SprintItem {
                finished: true,
                ..self
            }),
            SprintItemStatus::Finished => Ok(self),
            SprintItemStatus::Committed => Err(SprintItemError::NotAssigned { id: self.id }),
        }
    }
}

/// A sprint item that hasn't been persisted yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSprintItem {
    pub sprint_id: SprintId,
    pub origin: BacklogItemId,
    pub title: String,
    pub description: String,
}

impl NewSprintItem {
    pub fn with_id(self, id: SprintItemId) -> SprintItem {
        SprintItem {
            id,
            sprint_id: self.sprint_id,
            origin: self.origin,
            title: self.title,
            description: self.description,
            assigned_user: None,
            finished: false,
        }
    }
}

/// Errors that can occur during SprintItem transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SprintItemError {
    /// Finishing requires an assignee
    NotAssigned { id: SprintItemId },
    /// Finished items can't be handed to someone else
    AlreadyFinished { id: SprintItemId },
}

impl core::fmt::Display for SprintItemError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SprintItemError::NotAssigned { id } => {
                write!(f, "Sprint item {} has no assigned user", id)
            }
            SprintItemError::AlreadyFinished { id } => {
                write!(f, "Sprint item {} is already finished", id)
            }
        }
    }
}

impl std::error::Error for SprintItemError {}
