//! Sprint walkthrough
//!
//! Drives one backlog item through the whole lifecycle:
//! backlog → commit → assign → finish → confirm.

use std::fmt;

use anyhow::{anyhow, Context};
use scrum_adapter::InMemoryStore;
use scrum_domain::{Scheduling, SprintItem};
use scrum_usecase::{BacklogService, SprintService, UserService};
use serde::Serialize;
use shared::ScrumConfig;
use tracing::info;

/// What the walkthrough ended with
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoSummary {
    pub backlog_id: u64,
    pub sprint_id: u64,
    pub confirmed: bool,
    pub items: Vec<ItemSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSummary {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub assigned_user: Option<u64>,
    pub status: String,
}

impl From<&SprintItem> for ItemSummary {
    fn from(item: &SprintItem) -> Self {
        Self {
            id: item.id().value(),
            title: item.title().to_string(),
            description: item.description().to_string(),
            assigned_user: item.assigned_user().map(|u| u.value()),
            status: item.status().to_string(),
        }
    }
}

impl fmt::Display for DemoSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Sprint {} (backlog {}) - {}",
            self.sprint_id,
            self.backlog_id,
            if self.confirmed { "confirmed" } else { "open" }
        )?;
        for item in &self.items {
            let assignee = item
                .assigned_user
                .map(|u| format!("user {}", u))
                .unwrap_or_else(|| "unassigned".to_string());
            writeln!(
                f,
                "  #{} {} - {} [{}, {}]",
                item.id, item.title, item.description, assignee, item.status
            )?;
        }
        Ok(())
    }
}

pub fn run(config: &ScrumConfig) -> anyhow::Result<DemoSummary> {
    // ========================================
    // Dependency Injection - Wire up the system
    // ========================================

    // Adapters (could be swapped for SQLite, Postgres, etc.)
    let store = InMemoryStore::new();

    let mut backlogs = BacklogService::new(store.backlogs.clone(), store.backlog_items.clone());
    let mut users = UserService::new(store.users.clone());
    let mut sprints = SprintService::new(
        store.backlogs,
        store.backlog_items,
        store.sprints,
        store.sprint_items,
        store.users,
    )
    .with_policy(config.scheduling_policy());

    info!("📋 Filling the backlog...");
    let backlog = backlogs.create_backlog()?;
    backlogs.add_item("bug", "fix me", backlog.id())?;
    backlogs.add_item("feature", "build me", backlog.id())?;
    let items = backlogs.all_items(backlog.id())?;
    info!("   ✓ Backlog {} has {} items", backlog.id(), items.len());

    info!("🗓️  Scheduling a sprint ({} policy)...", sprints.policy());
    let sprint = match sprints.schedule_new_sprint(backlog.id())? {
        Scheduling::Scheduled(sprint) => sprint,
        Scheduling::Declined(reason) => return Err(anyhow!("Sprint was not scheduled: {}", reason)),
    };

    let first = items.first().context("Backlog is empty")?;
    let committed = sprints.commit_backlog_item_to_sprint(backlog.id(), first.id(), sprint.id())?;
    let origin = backlogs.item(backlog.id(), committed.origin())?;
    info!(
        "   ✓ Committed backlog item {} '{}' to sprint {}",
        origin.id(),
        origin.title(),
        sprint.id()
    );

    let developer = users.register_user(Some("developer".to_string()))?;
    sprints.assign_item_to_user(committed.id(), sprint.id(), developer.id())?;
    info!("   ✓ Assigned to user {}", developer.id());

    sprints.mark_item_as_finished(committed.id(), sprint.id())?;
    let sprint = sprints.confirm_sprint(sprint.id())?;
    info!("   ✓ Sprint {} confirmed", sprint.id());

    let items = sprints.all_sprint_items(sprint.id())?;
    Ok(DemoSummary {
        backlog_id: backlog.id().value(),
        sprint_id: sprint.id().value(),
        confirmed: sprint.is_confirmed(),
        items: items.iter().map(ItemSummary::from).collect(),
    })
}
