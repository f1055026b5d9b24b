//! Sprint Planner - Decides what may enter a sprint
//!
//! The planner answers two questions:
//! 1. Schedule: may a new sprint be scheduled for this backlog right now?
//! 2. Commit: what does a backlog item look like once it is in a sprint?
//!
//! This is pure domain logic - no I/O, no persistence. The caller loads the
//! entities, asks the planner, and stores whatever comes back.

use crate::model::backlog::{Backlog, BacklogId, BacklogItem};
use crate::model::sprint::{NewSprint, NewSprintItem, Sprint, SprintId};

/// Business rule applied when scheduling a sprint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SchedulingPolicy {
    /// Any existing backlog may get a new sprint at any time
    #[default]
    Unrestricted,
    /// A backlog may have at most one unconfirmed sprint
    SingleOpenSprint,
}

impl core::fmt::Display for SchedulingPolicy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SchedulingPolicy::Unrestricted => write!(f, "unrestricted"),
            SchedulingPolicy::SingleOpenSprint => write!(f, "single-open-sprint"),
        }
    }
}

/// Why a sprint was not scheduled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclineReason {
    /// The backlog id doesn't resolve
    UnknownBacklog { backlog_id: BacklogId },
    /// The backlog still has a sprint that hasn't been confirmed
    OpenSprintExists {
        backlog_id: BacklogId,
        sprint_id: SprintId,
    },
}

impl core::fmt::Display for DeclineReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DeclineReason::UnknownBacklog { backlog_id } => {
                write!(f, "backlog {} does not exist", backlog_id)
            }
            DeclineReason::OpenSprintExists {
                backlog_id,
                sprint_id,
            } => write!(
                f,
                "backlog {} already has unconfirmed sprint {}",
                backlog_id, sprint_id
            ),
        }
    }
}

/// Outcome of a scheduling attempt
///
/// Declining is a normal answer ("not now"), not an error, so callers
/// have to branch on it explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scheduling<T> {
    Scheduled(T),
    Declined(DeclineReason),
}

impl<T> Scheduling<T> {
    pub fn is_scheduled(&self) -> bool {
        matches!(self, Scheduling::Scheduled(_))
    }

    /// The scheduled value, dropping the decline reason
    pub fn scheduled(self) -> Option<T> {
        match self {
            Scheduling::Scheduled(value) => Some(value),
            Scheduling::Declined(_) => None,
        }
    }
}

/// Errors that can occur while planning
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanningError {
    /// The item comes from a different backlog than the sprint
    BacklogMismatch {
        sprint_id: SprintId,
        sprint_backlog: BacklogId,
        item_backlog: BacklogId,
    },
}

impl core::fmt::Display for PlanningError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PlanningError::BacklogMismatch {
                sprint_id,
                sprint_backlog,
                item_backlog,
            } => write!(
                f,
                "Sprint {} was scheduled from backlog {}, not backlog {}",
                sprint_id, sprint_backlog, item_backlog
            ),
        }
    }
}

impl std::error::Error for PlanningError {}

/// SprintPlanner - Stateless domain service
///
/// All state lives in the entities passed in.
#[derive(Debug, Clone, Copy, Default)]
pub struct SprintPlanner {
    policy: SchedulingPolicy,
}

impl SprintPlanner {
    pub fn new(policy: SchedulingPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> SchedulingPolicy {
        self.policy
    }

    /// Schedule: decide whether a new sprint may start
    ///
    /// `backlog` is the resolved backlog (None if the id didn't resolve),
    /// `sprints` are the sprints already scheduled from it.
    pub fn plan(
        &self,
        backlog_id: BacklogId,
        backlog: Option<&Backlog>,
        sprints: &[Sprint],
    ) -> Scheduling<NewSprint> {
        let Some(backlog) = backlog else {
            return Scheduling::Declined(DeclineReason::UnknownBacklog { backlog_id });
        };

        if self.policy == SchedulingPolicy::SingleOpenSprint {
            let open = sprints
                .iter()
                .find(|s| s.backlog_id() == backlog.id() && !s.is_confirmed());
            if let Some(open) = open {
                return Scheduling::Declined(DeclineReason::OpenSprintExists {
                    backlog_id: backlog.id(),
                    sprint_id: open.id(),
                });
            }
        }

        Scheduling::Scheduled(NewSprint::new(backlog.id()))
    }

    /// Commit: snapshot a backlog item into a sprint
    ///
    /// The copy is taken now; later changes to the backlog item are not
    /// reflected in the sprint item.
    pub fn commit(
        &self,
        item: &BacklogItem,
        sprint: &Sprint,
    ) -> Result<NewSprintItem, PlanningError> {
        if item.backlog_id() != sprint.backlog_id() {
            return Err(PlanningError::BacklogMismatch {
                sprint_id: sprint.id(),
                sprint_backlog: sprint.backlog_id(),
                item_backlog: item.backlog_id(),
            });
        }

        Ok(NewSprintItem {
            sprint_id: sprint.id(),
            origin: item.id(),
            title: item.title().to_string(),
            description: item.description().to_string(),
        })
    }
}
