//! Partitioning of sorted task lists into labelled groups.

use crate::task::domain::Task;
use serde::{Deserialize, Serialize};

/// Field a view groups by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKey {
    /// One group holding every task.
    None,
    /// Partition by workflow status.
    Status,
    /// Partition by priority.
    Priority,
    /// Partition by issue type.
    IssueType,
}

/// One labelled partition of the task list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskGroup {
    /// Literal field value the partition shares.
    pub label: String,
    /// Member tasks, keeping the order they arrived in.
    pub tasks: Vec<Task>,
}

/// Label of the single group produced by [`GroupKey::None`].
pub const UNGROUPED_LABEL: &str = "all";

/// Partitions tasks by the literal value of one field.
///
/// Groups appear in first-seen order; within a group the input order (the
/// sort stage's output) is preserved. [`GroupKey::None`] yields a single
/// group labelled [`UNGROUPED_LABEL`].
#[must_use]
pub fn group_tasks(tasks: Vec<Task>, key: GroupKey) -> Vec<TaskGroup> {
    if matches!(key, GroupKey::None) {
        return vec![TaskGroup {
            label: UNGROUPED_LABEL.to_owned(),
            tasks,
        }];
    }

    let mut groups: Vec<TaskGroup> = Vec::new();
    for task in tasks {
        let label = label_for(&task, key);
        match groups.iter_mut().find(|group| group.label == label) {
            Some(group) => group.tasks.push(task),
            None => groups.push(TaskGroup {
                label,
                tasks: vec![task],
            }),
        }
    }
    groups
}

fn label_for(task: &Task, key: GroupKey) -> String {
    match key {
        GroupKey::None => UNGROUPED_LABEL.to_owned(),
        GroupKey::Status => task.status().as_str().to_owned(),
        GroupKey::Priority => task.priority().as_str().to_owned(),
        GroupKey::IssueType => task.issue_type().as_str().to_owned(),
    }
}
