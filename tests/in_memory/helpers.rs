//! Shared fixtures for the in-memory integration tests.

use carelane::hierarchy::domain::HierarchyState;
use carelane::task::adapters::InMemoryTaskRepository;
use carelane::task::domain::Task;
use carelane::task::services::TaskDirectoryService;
use carelane::task::validation::RawTaskRecord;
use mockable::DefaultClock;
use std::sync::Arc;

/// Directory service wired to the in-memory repository.
pub type DirectoryService = TaskDirectoryService<InMemoryTaskRepository, DefaultClock>;

/// One row of the eight-ticket seed dataset.
fn record(
    id: &str,
    patient: &str,
    description: &str,
    status: &str,
    priority: &str,
    issue_type: &str,
    due_date: Option<&str>,
    parent: Option<&str>,
) -> RawTaskRecord {
    RawTaskRecord {
        id: Some(id.to_owned()),
        ticket_number: Some(format!("CT-10{}", id.strip_prefix('T').unwrap_or(id))),
        patient_name: Some(patient.to_owned()),
        description: Some(description.to_owned()),
        status: Some(status.to_owned()),
        priority: Some(priority.to_owned()),
        issue_type: Some(issue_type.to_owned()),
        due_date: due_date.map(str::to_owned),
        created_at: Some("2024-03-01".to_owned()),
        updated_at: Some("2024-03-01".to_owned()),
        parent_task_id: parent.map(str::to_owned),
        ..RawTaskRecord::default()
    }
}

/// The eight-ticket seed dataset; T3 carries a parent hint pointing at T2.
pub fn seed_records() -> Vec<RawTaskRecord> {
    vec![
        record(
            "T1",
            "Amelia Ortiz",
            "Renew albuterol prescription",
            "todo",
            "high",
            "medical",
            Some("2024-03-10"),
            None,
        ),
        record(
            "T2",
            "Ben Howard",
            "Collect insurance authorization",
            "in_progress",
            "medium",
            "administrative",
            Some("2024-03-12"),
            None,
        ),
        record(
            "T3",
            "Ben Howard",
            "Fax signed consent form",
            "done",
            "low",
            "administrative",
            Some("2024-03-12"),
            Some("T2"),
        ),
        record(
            "T4",
            "Dmitri Volkov",
            "Schedule sleep study",
            "todo",
            "low",
            "medical",
            None,
            None,
        ),
        record(
            "T5",
            "Erin Walsh",
            "Review lab panel results",
            "done",
            "high",
            "medical",
            Some("2024-03-15"),
            None,
        ),
        record(
            "T6",
            "Farah Khan",
            "Post-discharge follow-up call",
            "in_progress",
            "high",
            "follow_up",
            Some("2024-03-09"),
            None,
        ),
        record(
            "T7",
            "George Mason",
            "Update pharmacy of record",
            "todo",
            "medium",
            "administrative",
            Some("2024-03-20"),
            None,
        ),
        record(
            "T8",
            "Hana Sato",
            "Close out wound-care plan",
            "done",
            "medium",
            "follow_up",
            Some("2024-03-11"),
            None,
        ),
    ]
}

/// Ingests the seed dataset and derives the starting hierarchy.
pub async fn seeded_board() -> (DirectoryService, Vec<Task>, HierarchyState) {
    let service = TaskDirectoryService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    );
    let report = service
        .ingest_records(&seed_records())
        .await
        .expect("seed dataset ingests");
    assert!(report.rejected.is_empty(), "seed dataset has no bad rows");

    let tasks = service.list_tasks().await.expect("listing succeeds");
    let hierarchy = HierarchyState::from_tasks(&tasks);
    (service, tasks, hierarchy)
}

/// Ids of a task list, in order, for terse assertions.
pub fn ids(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|task| task.id().as_str()).collect()
}
