//! View-level composition of the shared pipeline stages.

use super::{FilterCriteria, GroupKey, SortDirection, SortKey, filter_tasks, group_tasks, sort_tasks};
use crate::task::domain::{Task, TaskStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Presentation mode of the task board.
///
/// The mode is a UI toggle only: every mode consumes the same pipeline
/// output and derives no state of its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Status columns with cards.
    #[default]
    Board,
    /// Flat or grouped rows.
    List,
    /// Due-date cells.
    Calendar,
}

/// One status column of the board view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardColumn {
    /// Status shared by every card in the column.
    pub status: TaskStatus,
    /// Cards in pipeline order.
    pub tasks: Vec<Task>,
}

/// One due-date cell of the calendar view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarBucket {
    /// Due date shared by the bucket, or `None` for undated tasks.
    pub date: Option<NaiveDate>,
    /// Member tasks in pipeline order.
    pub tasks: Vec<Task>,
}

/// Statuses every board always shows, in column order.
const BOARD_STATUSES: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done];

/// Runs the shared pipeline for the list view.
#[must_use]
pub fn list_view(
    tasks: &[Task],
    criteria: &FilterCriteria,
    sort_key: SortKey,
    direction: SortDirection,
    group_key: GroupKey,
) -> Vec<super::TaskGroup> {
    group_tasks(
        sort_tasks(filter_tasks(tasks, criteria), sort_key, direction),
        group_key,
    )
}

/// Runs the shared pipeline, then buckets cards into status columns.
///
/// The three known statuses always appear, empty or not; any unknown
/// status found in the visible tasks gets an extra column appended in
/// first-seen order, so forward-compatible statuses remain reachable.
#[must_use]
pub fn board_columns(
    tasks: &[Task],
    criteria: &FilterCriteria,
    sort_key: SortKey,
    direction: SortDirection,
) -> Vec<BoardColumn> {
    let visible = sort_tasks(filter_tasks(tasks, criteria), sort_key, direction);

    let mut columns: Vec<BoardColumn> = BOARD_STATUSES
        .iter()
        .map(|status| BoardColumn {
            status: status.clone(),
            tasks: Vec::new(),
        })
        .collect();
    for task in visible {
        let status = task.status().clone();
        match columns.iter_mut().find(|column| column.status == status) {
            Some(column) => column.tasks.push(task),
            None => columns.push(BoardColumn {
                status,
                tasks: vec![task],
            }),
        }
    }
    columns
}

/// Runs the shared pipeline, then buckets cards by due date.
///
/// Dated buckets appear in ascending date order; tasks without a due date
/// collect in a final `None` bucket.
#[must_use]
pub fn calendar_buckets(
    tasks: &[Task],
    criteria: &FilterCriteria,
    sort_key: SortKey,
    direction: SortDirection,
) -> Vec<CalendarBucket> {
    let visible = sort_tasks(filter_tasks(tasks, criteria), sort_key, direction);

    let mut dated: BTreeMap<NaiveDate, Vec<Task>> = BTreeMap::new();
    let mut undated: Vec<Task> = Vec::new();
    for task in visible {
        match task.due_date() {
            Some(due) => dated.entry(due).or_default().push(task),
            None => undated.push(task),
        }
    }

    let mut buckets: Vec<CalendarBucket> = dated
        .into_iter()
        .map(|(date, bucket_tasks)| CalendarBucket {
            date: Some(date),
            tasks: bucket_tasks,
        })
        .collect();
    if !undated.is_empty() {
        buckets.push(CalendarBucket {
            date: None,
            tasks: undated,
        });
    }
    buckets
}
