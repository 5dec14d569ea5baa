//! Relationship store state and its pure transitions.

use super::{HierarchyError, InvariantViolation};
use crate::task::domain::{Task, TaskId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Adjacency maps describing how care tasks relate.
///
/// Three maps are held: `parents` (child → parent, at most one parent per
/// task), `children` (parent → ordered children), and `links` (symmetric
/// non-hierarchical associations). `parents` and `children` are kept as
/// mutual inverses by every transition; `links` is kept symmetric. Adjacency
/// lists are pruned when they empty; an absent key and an empty list are
/// the same fact, and only the former is stored.
///
/// All transitions are pure: they take `&self` and return a fresh state,
/// leaving the receiver untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyState {
    parents: HashMap<TaskId, TaskId>,
    children: HashMap<TaskId, Vec<TaskId>>,
    links: HashMap<TaskId, Vec<TaskId>>,
}

impl HierarchyState {
    /// Creates an empty relationship store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole store state from raw adjacency maps.
    ///
    /// No validation is performed: tests use this to seed deliberately
    /// inconsistent states, and the accessors drop whatever fails to
    /// resolve. Run [`HierarchyState::check_invariants`] when consistency
    /// matters.
    #[must_use]
    pub const fn from_parts(
        parents: HashMap<TaskId, TaskId>,
        children: HashMap<TaskId, Vec<TaskId>>,
        links: HashMap<TaskId, Vec<TaskId>>,
    ) -> Self {
        Self {
            parents,
            children,
            links,
        }
    }

    /// Seeds a store from the parent hints carried by task records.
    ///
    /// Hints that would self-parent or create a cycle are skipped with a
    /// warning rather than failing the whole seeding pass.
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let mut state = Self::new();
        for task in tasks {
            if let Some(parent) = task.parent_task_id() {
                match state.add_child(task.id(), parent) {
                    Ok(next) => state = next,
                    Err(error) => {
                        tracing::warn!(%error, "skipped parent hint during hierarchy seeding");
                    }
                }
            }
        }
        state
    }

    /// Returns the parent of a task, if it has one.
    #[must_use]
    pub fn parent_of(&self, id: &TaskId) -> Option<&TaskId> {
        self.parents.get(id)
    }

    /// Returns the children of a task in insertion order.
    #[must_use]
    pub fn children_of(&self, id: &TaskId) -> &[TaskId] {
        self.children.get(id).map_or(&[], Vec::as_slice)
    }

    /// Returns the linked tasks of a task in insertion order.
    #[must_use]
    pub fn links_of(&self, id: &TaskId) -> &[TaskId] {
        self.links.get(id).map_or(&[], Vec::as_slice)
    }

    /// Returns `true` when no relationships are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty() && self.children.is_empty() && self.links.is_empty()
    }

    /// Iterates all child → parent entries.
    pub fn parent_entries(&self) -> impl Iterator<Item = (&TaskId, &TaskId)> {
        self.parents.iter()
    }

    /// Iterates all parent → children entries.
    pub fn child_entries(&self) -> impl Iterator<Item = (&TaskId, &[TaskId])> {
        self.children.iter().map(|(id, kids)| (id, kids.as_slice()))
    }

    /// Iterates all task → linked-tasks entries.
    pub fn link_entries(&self) -> impl Iterator<Item = (&TaskId, &[TaskId])> {
        self.links.iter().map(|(id, linked)| (id, linked.as_slice()))
    }

    /// Makes `child` a subtask of `parent`.
    ///
    /// Reassigning a child that already has a parent first detaches it from
    /// the old parent's children list, so the maps stay mutual inverses.
    /// Adding a child it already has is idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`HierarchyError::SelfParent`] when `child == parent` and
    /// [`HierarchyError::WouldCreateCycle`] when `parent` is a descendant
    /// of `child`.
    pub fn add_child(&self, child: &TaskId, parent: &TaskId) -> Result<Self, HierarchyError> {
        if child == parent {
            return Err(HierarchyError::SelfParent(child.clone()));
        }
        if self.is_ancestor(child, parent) {
            return Err(HierarchyError::WouldCreateCycle {
                child: child.clone(),
                parent: parent.clone(),
            });
        }

        let mut next = self.clone();
        if let Some(previous) = next.parents.get(child).cloned()
            && &previous != parent
        {
            detach_from(&mut next.children, child, &previous);
        }
        next.parents.insert(child.clone(), parent.clone());
        let siblings = next.children.entry(parent.clone()).or_default();
        if !siblings.contains(child) {
            siblings.push(child.clone());
        }
        Ok(next)
    }

    /// Detaches `child` from `parent`.
    ///
    /// Total: unknown ids and mismatched pairs are no-ops on the maps they
    /// do not touch. The parent entry is only cleared when it actually
    /// points at `parent`, so a stale caller cannot sever an unrelated
    /// assignment.
    #[must_use]
    pub fn remove_child(&self, child: &TaskId, parent: &TaskId) -> Self {
        let mut next = self.clone();
        if next.parents.get(child) == Some(parent) {
            next.parents.remove(child);
        }
        detach_from(&mut next.children, child, parent);
        next
    }

    /// Detaches `child` from whatever parent it currently has.
    ///
    /// No-op when the task is parentless.
    #[must_use]
    pub fn remove_parent(&self, child: &TaskId) -> Self {
        match self.parents.get(child) {
            Some(parent) => {
                let current = parent.clone();
                self.remove_child(child, &current)
            }
            None => self.clone(),
        }
    }

    /// Links two tasks symmetrically.
    ///
    /// Both directions are inserted in one transition; repeating an
    /// existing link is idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`HierarchyError::SelfLink`] when `a == b`.
    pub fn link_tasks(&self, a: &TaskId, b: &TaskId) -> Result<Self, HierarchyError> {
        if a == b {
            return Err(HierarchyError::SelfLink(a.clone()));
        }
        let mut next = self.clone();
        attach_link(&mut next.links, a, b);
        attach_link(&mut next.links, b, a);
        Ok(next)
    }

    /// Removes the link between two tasks in both directions.
    ///
    /// Total: unlinking tasks that are not linked is a no-op.
    #[must_use]
    pub fn unlink_tasks(&self, a: &TaskId, b: &TaskId) -> Self {
        let mut next = self.clone();
        detach_from(&mut next.links, b, a);
        detach_from(&mut next.links, a, b);
        next
    }

    /// Purges every trace of a task from the store.
    ///
    /// This is the one multi-id transition: it drops the task's own
    /// entries, clears parent entries of its children, and walks every
    /// other children and link list to remove the id, pruning lists that
    /// empty. After this call no map key or value mentions `id`.
    #[must_use]
    pub fn remove_task(&self, id: &TaskId) -> Self {
        let mut next = self.clone();
        next.parents.remove(id);
        next.parents.retain(|_, parent| parent != id);
        next.children.remove(id);
        next.children = drop_from_lists(std::mem::take(&mut next.children), id);
        next.links.remove(id);
        next.links = drop_from_lists(std::mem::take(&mut next.links), id);
        next
    }

    /// Reports whether `candidate` is `start` or one of its ancestors.
    ///
    /// Walks the parent chain with a step bound so a corrupted seeded
    /// state cannot loop forever.
    fn is_ancestor(&self, candidate: &TaskId, start: &TaskId) -> bool {
        let mut current = Some(start);
        let mut remaining = self.parents.len() + 1;
        while let Some(id) = current {
            if id == candidate {
                return true;
            }
            if remaining == 0 {
                return false;
            }
            remaining -= 1;
            current = self.parents.get(id);
        }
        false
    }

    /// Runs the debug invariant pass over the whole store.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        super::invariants::verify(self)
    }
}

/// Removes `member` from `owner`'s adjacency list, pruning the entry if it
/// empties.
fn detach_from(lists: &mut HashMap<TaskId, Vec<TaskId>>, member: &TaskId, owner: &TaskId) {
    if let Some(members) = lists.get_mut(owner) {
        members.retain(|id| id != member);
        if members.is_empty() {
            lists.remove(owner);
        }
    }
}

/// Appends `to` to `from`'s link list unless already present.
fn attach_link(links: &mut HashMap<TaskId, Vec<TaskId>>, from: &TaskId, to: &TaskId) {
    let targets = links.entry(from.clone()).or_default();
    if !targets.contains(to) {
        targets.push(to.clone());
    }
}

/// Removes `id` from every adjacency list, pruning lists that empty.
fn drop_from_lists(
    lists: HashMap<TaskId, Vec<TaskId>>,
    id: &TaskId,
) -> HashMap<TaskId, Vec<TaskId>> {
    lists
        .into_iter()
        .filter_map(|(owner, mut members)| {
            members.retain(|member| member != id);
            (!members.is_empty()).then_some((owner, members))
        })
        .collect()
}
