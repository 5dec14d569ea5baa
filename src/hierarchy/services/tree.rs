//! Full descendant-tree assembly for outline views.

use crate::hierarchy::domain::HierarchyState;
use crate::task::domain::{Task, TaskId};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// One node of the assembled task forest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskTreeNode {
    /// Resolved task at this node.
    pub task: Task,
    /// Depth below the root, starting at zero.
    pub depth: usize,
    /// Child subtrees in adjacency order.
    pub children: Vec<TaskTreeNode>,
}

/// Assembles the descendant forest of every parentless task.
///
/// Roots appear in task-list order; children follow adjacency order. Ids
/// that no longer resolve to a live task are dropped, and a visited guard
/// stops descent into any id seen before, so assembly terminates even on a
/// cyclic store seeded through
/// [`HierarchyState::from_parts`](crate::hierarchy::domain::HierarchyState::from_parts).
#[must_use]
pub fn build_task_tree(all_tasks: &[Task], hierarchy: &HierarchyState) -> Vec<TaskTreeNode> {
    let by_id: HashMap<&TaskId, &Task> = all_tasks.iter().map(|task| (task.id(), task)).collect();
    let mut visited: HashSet<TaskId> = HashSet::new();

    all_tasks
        .iter()
        .filter(|task| hierarchy.parent_of(task.id()).is_none())
        .filter_map(|task| assemble(task.id(), 0, &by_id, hierarchy, &mut visited))
        .collect()
}

fn assemble(
    id: &TaskId,
    depth: usize,
    by_id: &HashMap<&TaskId, &Task>,
    hierarchy: &HierarchyState,
    visited: &mut HashSet<TaskId>,
) -> Option<TaskTreeNode> {
    let task = by_id.get(id)?;
    if !visited.insert(id.clone()) {
        return None;
    }
    let children = hierarchy
        .children_of(id)
        .iter()
        .filter_map(|child| assemble(child, depth + 1, by_id, hierarchy, visited))
        .collect();
    Some(TaskTreeNode {
        task: (*task).clone(),
        depth,
        children,
    })
}
