//! Shared builders for relationship store tests.

use crate::task::domain::{
    IssueType, PersistedTaskData, Task, TaskId, TaskPriority, TaskSeed, TaskStatus, TicketNumber,
};
use chrono::NaiveDate;

/// Builds a task id, panicking on invalid input.
pub fn tid(value: &str) -> TaskId {
    TaskId::new(value).expect("valid task id")
}

/// Builds a minimal task fixture carrying a seed-time parent hint.
pub fn task_with_parent(
    id: &str,
    status: TaskStatus,
    priority: TaskPriority,
    parent: &str,
) -> Task {
    let base = task(id, status, priority);
    let seed = TaskSeed::new(
        base.id().clone(),
        base.ticket_number().clone(),
        base.patient_name(),
        base.priority(),
        base.issue_type(),
    )
    .expect("valid seed")
    .with_status(base.status().clone())
    .with_parent_task(tid(parent));
    let day = NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date");
    Task::from_persisted(PersistedTaskData {
        seed,
        created_at: day,
        updated_at: day,
    })
}

/// Builds a minimal task fixture with the given id, status, and priority.
pub fn task(id: &str, status: TaskStatus, priority: TaskPriority) -> Task {
    let seed = TaskSeed::new(
        tid(id),
        TicketNumber::new(format!("CT-{id}")).expect("valid ticket number"),
        format!("Patient {id}"),
        priority,
        IssueType::Medical,
    )
    .expect("valid seed")
    .with_status(status)
    .with_description(format!("Work item {id}"));
    let day = NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date");
    Task::from_persisted(PersistedTaskData {
        seed,
        created_at: day,
        updated_at: day,
    })
}
