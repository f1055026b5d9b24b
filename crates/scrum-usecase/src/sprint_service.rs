//! Sprint use-case service.
//!
//! # Responsibility
//! - Schedule sprints for a backlog (subject to the scheduling policy).
//! - Commit backlog items into a sprint as sprint items.
//! - Assign, finish and list sprint items; confirm sprints.
//!
//! # Invariants
//! - Scheduling that is not allowed is a `Scheduling::Declined`, never an error.
//! - Sprint items are resolved *within* their sprint; an item of another
//!   sprint is reported as not found.
//! - Every mutation is load → pure transition → whole-entity save.
//! - Committing the same backlog item twice creates two sprint items.

use scrum_domain::{
    BacklogId, BacklogItemId, BacklogItemRepository, BacklogRepository, Scheduling,
    SchedulingPolicy, Sprint, SprintId, SprintItem, SprintItemId, SprintItemRepository,
    SprintPlanner, SprintRepository, UserId, UserRepository,
};
use tracing::{debug, info, warn};

use crate::error::{Result, ServiceError};

/// Sprint service facade over repository implementations.
///
/// Backlogs and backlog items are only read; sprints, sprint items and
/// users are resolved through their own ports.
#[derive(Debug, Clone)]
pub struct SprintService<B, I, S, T, U> {
    backlogs: B,
    backlog_items: I,
    sprints: S,
    sprint_items: T,
    users: U,
    planner: SprintPlanner,
}

impl<B, I, S, T, U> SprintService<B, I, S, T, U>
where
    B: BacklogRepository,
    I: BacklogItemRepository,
    S: SprintRepository,
    T: SprintItemRepository,
    U: UserRepository,
{
    /// Creates a service with the default (unrestricted) scheduling policy.
    pub fn new(backlogs: B, backlog_items: I, sprints: S, sprint_items: T, users: U) -> Self {
        Self {
            backlogs,
            backlog_items,
            sprints,
            sprint_items,
            users,
            planner: SprintPlanner::default(),
        }
    }

    /// Builder: set the scheduling policy
    pub fn with_policy(mut self, policy: SchedulingPolicy) -> Self {
        self.planner = SprintPlanner::new(policy);
        self
    }

    pub fn policy(&self) -> SchedulingPolicy {
        self.planner.policy()
    }

    /// Tries to schedule a new sprint for the backlog.
    ///
    /// Returns `Scheduling::Declined` when the backlog doesn't exist or the
    /// policy doesn't allow another sprint right now.
    pub fn schedule_new_sprint(&mut self, backlog_id: BacklogId) -> Result<Scheduling<Sprint>> {
        let backlog = self.backlogs.find_by_id(backlog_id)?;
        let existing = match &backlog {
            Some(backlog) => self.sprints.find_by_backlog(backlog.id())?,
            None => Vec::new(),
        };

        match self.planner.plan(backlog_id, backlog.as_ref(), &existing) {
            Scheduling::Scheduled(draft) => {
                let sprint = self.sprints.insert(draft)?;
                info!(
                    backlog_id = %backlog_id,
                    sprint_id = %sprint.id(),
                    policy = %self.planner.policy(),
                    "Sprint scheduled"
                );
                Ok(Scheduling::Scheduled(sprint))
            }
            Scheduling::Declined(reason) => {
                warn!(backlog_id = %backlog_id, %reason, "Sprint scheduling declined");
                Ok(Scheduling::Declined(reason))
            }
        }
    }

    /// Copies a backlog item into the sprint as a new sprint item.
    pub fn commit_backlog_item_to_sprint(
        &mut self,
        backlog_id: BacklogId,
        backlog_item_id: BacklogItemId,
        sprint_id: SprintId,
    ) -> Result<SprintItem> {
        let item = self
            .backlog_items
            .find_by_id(backlog_item_id)?
            .filter(|item| item.belongs_to(backlog_id))
            .ok_or_else(|| ServiceError::not_found("Backlog item", backlog_item_id))?;
        let sprint = self.sprint(sprint_id)?;

        let draft = self.planner.commit(&item, &sprint).inspect_err(|err| {
            warn!(
                sprint_id = %sprint_id,
                backlog_item_id = %backlog_item_id,
                %err,
                "Commit rejected"
            );
        })?;
        let sprint_item = self.sprint_items.insert(draft)?;

        info!(
            sprint_id = %sprint_id,
            backlog_item_id = %backlog_item_id,
            sprint_item_id = %sprint_item.id(),
            "Backlog item committed to sprint"
        );
        Ok(sprint_item)
    }

    /// Assigns a sprint item to a user, replacing any previous assignee.
    pub fn assign_item_to_user(
        &mut self,
        sprint_item_id: SprintItemId,
        sprint_id: SprintId,
        user_id: UserId,
    ) -> Result<SprintItem> {
        let item = self.sprint_item(sprint_item_id, sprint_id)?;
        if !self.users.exists(user_id)? {
            return Err(ServiceError::not_found("User", user_id));
        }

        let previous = item.assigned_user();
        let item = item.assign_to(user_id).inspect_err(|err| {
            warn!(sprint_item_id = %sprint_item_id, %err, "Assignment rejected");
        })?;
        self.sprint_items.save(&item)?;

        info!(
            sprint_id = %sprint_id,
            sprint_item_id = %sprint_item_id,
            user_id = %user_id,
            reassigned = previous.is_some(),
            "Sprint item assigned"
        );
        Ok(item)
    }

    /// Confirms the sprint. Confirming twice is harmless.
    pub fn confirm_sprint(&mut self, sprint_id: SprintId) -> Result<Sprint> {
        let sprint = self.sprint(sprint_id)?.confirm();
        self.sprints.save(&sprint)?;
        info!(sprint_id = %sprint_id, "Sprint confirmed");
        Ok(sprint)
    }

    /// Marks an assigned sprint item as finished.
    pub fn mark_item_as_finished(
        &mut self,
        sprint_item_id: SprintItemId,
        sprint_id: SprintId,
    ) -> Result<SprintItem> {
        let item = self
            .sprint_item(sprint_item_id, sprint_id)?
            .finish()
            .inspect_err(|err| {
                warn!(sprint_item_id = %sprint_item_id, %err, "Finish rejected");
            })?;
        self.sprint_items.save(&item)?;
        info!(sprint_id = %sprint_id, sprint_item_id = %sprint_item_id, "Sprint item finished");
        Ok(item)
    }

    /// Items of one sprint, in the order they were committed.
    pub fn all_sprint_items(&self, sprint_id: SprintId) -> Result<Vec<SprintItem>> {
        let sprint = self.sprint(sprint_id)?;
        let items = self.sprint_items.find_by_sprint(sprint.id())?;
        debug!(sprint_id = %sprint_id, count = items.len(), "Listed sprint items");
        Ok(items)
    }

    pub fn sprint(&self, sprint_id: SprintId) -> Result<Sprint> {
        self.sprints
            .find_by_id(sprint_id)?
            .ok_or_else(|| ServiceError::not_found("Sprint", sprint_id))
    }

    /// Sprints scheduled from one backlog, oldest first.
    pub fn sprints_for_backlog(&self, backlog_id: BacklogId) -> Result<Vec<Sprint>> {
        if !self.backlogs.exists(backlog_id)? {
            return Err(ServiceError::not_found("Backlog", backlog_id));
        }
        Ok(self.sprints.find_by_backlog(backlog_id)?)
    }

    fn sprint_item(&self, sprint_item_id: SprintItemId, sprint_id: SprintId) -> Result<SprintItem> {
        self.sprint_items
            .find_by_id(sprint_item_id)?
            .filter(|item| item.belongs_to(sprint_id))
            .ok_or_else(|| ServiceError::not_found("Sprint item", sprint_item_id))
    }
}
