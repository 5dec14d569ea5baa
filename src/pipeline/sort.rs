//! Stable task ordering.

use crate::task::domain::Task;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Field a view sorts by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Due date; undated tasks sort last in either direction.
    DueDate,
    /// Priority rank, high ranking above medium above low.
    Priority,
    /// Workflow status rank, todo before in-progress before done.
    Status,
    /// Patient display name, compared case-insensitively.
    PatientName,
}

/// Direction of a sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Smallest key first.
    Ascending,
    /// Largest key first.
    Descending,
}

impl SortDirection {
    fn orient(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Sorts tasks by one key, stably.
///
/// Tasks comparing equal keep their input order. With [`SortKey::DueDate`],
/// undated tasks sort after dated ones regardless of direction so the
/// calendar tail stays put when the direction flips.
#[must_use]
pub fn sort_tasks(mut tasks: Vec<Task>, key: SortKey, direction: SortDirection) -> Vec<Task> {
    tasks.sort_by(|a, b| compare(a, b, key, direction));
    tasks
}

fn compare(a: &Task, b: &Task, key: SortKey, direction: SortDirection) -> Ordering {
    match key {
        SortKey::DueDate => match (a.due_date(), b.due_date()) {
            (Some(left), Some(right)) => direction.orient(left.cmp(&right)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
        SortKey::Priority => {
            direction.orient(a.priority().ordinal().cmp(&b.priority().ordinal()))
        }
        SortKey::Status => direction.orient(a.status().ordinal().cmp(&b.status().ordinal())),
        SortKey::PatientName => direction.orient(
            a.patient_name()
                .to_lowercase()
                .cmp(&b.patient_name().to_lowercase()),
        ),
    }
}
