//! Single-task relationship resolution.

use crate::hierarchy::domain::HierarchyState;
use crate::task::domain::{Task, TaskId};
use serde::Serialize;
use std::collections::HashMap;

/// Resolved relationships of one task.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RelatedTasks {
    /// The task itself, when it exists in the task list.
    pub task: Option<Task>,
    /// Resolved parent, when one is assigned and still exists.
    pub parent_task: Option<Task>,
    /// Resolved children in adjacency order.
    pub child_tasks: Vec<Task>,
    /// Resolved linked tasks in adjacency order.
    pub linked_tasks: Vec<Task>,
}

/// Resolves the parent, children, and linked tasks of `task_id`.
///
/// Ids held by the store that no longer resolve to a live task are
/// dropped silently: the task directory and the relationship store are not
/// transactionally coupled, so stale entries are an expected condition,
/// not an error. Never fails; missing tasks yield empty arrays and `None`
/// fields.
#[must_use]
pub fn related_tasks(
    task_id: &TaskId,
    all_tasks: &[Task],
    hierarchy: &HierarchyState,
) -> RelatedTasks {
    let by_id: HashMap<&TaskId, &Task> = all_tasks.iter().map(|task| (task.id(), task)).collect();
    let resolve = |id: &TaskId| by_id.get(id).map(|task| (*task).clone());

    RelatedTasks {
        task: resolve(task_id),
        parent_task: hierarchy.parent_of(task_id).and_then(resolve),
        child_tasks: hierarchy
            .children_of(task_id)
            .iter()
            .filter_map(resolve)
            .collect(),
        linked_tasks: hierarchy
            .links_of(task_id)
            .iter()
            .filter_map(resolve)
            .collect(),
    }
}
