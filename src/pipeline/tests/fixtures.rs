//! Eight-task seed fixture shared by the pipeline tests.

use crate::task::domain::{
    CareJourneyId, IssueType, PersistedTaskData, Task, TaskId, TaskPriority, TaskSeed, TaskStatus,
    TicketNumber,
};
use chrono::NaiveDate;
use once_cell::sync::Lazy;

static SEED: Lazy<Vec<Task>> = Lazy::new(build_all);

/// Ingredients for one fixture row.
struct Row {
    id: &'static str,
    ticket: &'static str,
    patient: &'static str,
    description: &'static str,
    status: TaskStatus,
    priority: TaskPriority,
    issue_type: IssueType,
    due: Option<(i32, u32, u32)>,
    journey: Option<&'static str>,
}

fn build(row: &Row) -> Task {
    let mut seed = TaskSeed::new(
        TaskId::new(row.id).expect("valid id"),
        TicketNumber::new(row.ticket).expect("valid ticket"),
        row.patient,
        row.priority,
        row.issue_type,
    )
    .expect("valid seed")
    .with_status(row.status.clone())
    .with_description(row.description);
    if let Some((year, month, day)) = row.due {
        seed = seed.with_due_date(NaiveDate::from_ymd_opt(year, month, day).expect("valid date"));
    }
    if let Some(journey) = row.journey {
        seed = seed.with_care_journey(CareJourneyId::new(journey).expect("valid journey"));
    }
    let created = NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date");
    Task::from_persisted(PersistedTaskData {
        seed,
        created_at: created,
        updated_at: created,
    })
}

/// The eight-task seed used across filter, sort, group, and view tests.
pub fn seed_tasks() -> Vec<Task> {
    SEED.clone()
}

fn build_all() -> Vec<Task> {
    let rows = [
        Row {
            id: "T1",
            ticket: "CT-1001",
            patient: "Amelia Ortiz",
            description: "Renew albuterol prescription",
            status: TaskStatus::Todo,
            priority: TaskPriority::High,
            issue_type: IssueType::Medical,
            due: Some((2024, 3, 10)),
            journey: None,
        },
        Row {
            id: "T2",
            ticket: "CT-1002",
            patient: "Ben Howard",
            description: "Collect insurance authorization",
            status: TaskStatus::InProgress,
            priority: TaskPriority::Medium,
            issue_type: IssueType::Administrative,
            due: Some((2024, 3, 12)),
            journey: None,
        },
        Row {
            id: "T3",
            ticket: "CT-1003",
            patient: "Ben Howard",
            description: "Fax signed consent form",
            status: TaskStatus::Done,
            priority: TaskPriority::Low,
            issue_type: IssueType::Administrative,
            due: Some((2024, 3, 12)),
            journey: None,
        },
        Row {
            id: "T4",
            ticket: "CT-1004",
            patient: "Dmitri Volkov",
            description: "Schedule sleep study",
            status: TaskStatus::Todo,
            priority: TaskPriority::Low,
            issue_type: IssueType::Medical,
            due: None,
            journey: None,
        },
        Row {
            id: "T5",
            ticket: "CT-1005",
            patient: "Erin Walsh",
            description: "Review lab panel results",
            status: TaskStatus::Done,
            priority: TaskPriority::High,
            issue_type: IssueType::Medical,
            due: Some((2024, 3, 15)),
            journey: Some("CJ-7"),
        },
        Row {
            id: "T6",
            ticket: "CT-1006",
            patient: "Farah Khan",
            description: "Post-discharge follow-up call",
            status: TaskStatus::InProgress,
            priority: TaskPriority::High,
            issue_type: IssueType::FollowUp,
            due: Some((2024, 3, 9)),
            journey: Some("CJ-7"),
        },
        Row {
            id: "T7",
            ticket: "CT-1007",
            patient: "George Mason",
            description: "Update pharmacy of record",
            status: TaskStatus::Todo,
            priority: TaskPriority::Medium,
            issue_type: IssueType::Administrative,
            due: Some((2024, 3, 20)),
            journey: None,
        },
        Row {
            id: "T8",
            ticket: "CT-1008",
            patient: "Hana Sato",
            description: "Close out wound-care plan",
            status: TaskStatus::Done,
            priority: TaskPriority::Medium,
            issue_type: IssueType::FollowUp,
            due: Some((2024, 3, 11)),
            journey: None,
        },
    ];
    rows.iter().map(build).collect()
}

/// Ids of a task list, in order, for terse assertions.
pub fn ids(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|task| task.id().as_str()).collect()
}
