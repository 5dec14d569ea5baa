//! Debug invariant pass over the relationship store.
//!
//! Production transitions keep these properties by construction; the pass
//! exists for tests that seed states by hand and for catching regressions
//! in the transitions themselves.

use super::{HierarchyState, InvariantViolation};
use crate::task::domain::TaskId;
use std::collections::HashSet;

/// Verifies every store invariant, returning the first violation found.
pub(super) fn verify(state: &HierarchyState) -> Result<(), InvariantViolation> {
    verify_parent_child_inverse(state)?;
    verify_link_symmetry(state)?;
    verify_acyclic(state)
}

/// `parents` and `children` must be mutual inverses with no empty or
/// duplicated listings.
fn verify_parent_child_inverse(state: &HierarchyState) -> Result<(), InvariantViolation> {
    for (child, parent) in state.parent_entries() {
        if child == parent {
            return Err(InvariantViolation::SelfReference(child.clone()));
        }
        if !state.children_of(parent).contains(child) {
            return Err(InvariantViolation::MissingChildListing {
                child: child.clone(),
                parent: parent.clone(),
            });
        }
    }
    for (parent, kids) in state.child_entries() {
        if kids.is_empty() {
            return Err(InvariantViolation::EmptyAdjacencyList(parent.clone()));
        }
        let mut seen: HashSet<&TaskId> = HashSet::new();
        for child in kids {
            if child == parent {
                return Err(InvariantViolation::SelfReference(parent.clone()));
            }
            if !seen.insert(child) {
                return Err(InvariantViolation::DuplicateChildListing {
                    parent: parent.clone(),
                    child: child.clone(),
                });
            }
            if state.parent_of(child) != Some(parent) {
                return Err(InvariantViolation::OrphanChildListing {
                    parent: parent.clone(),
                    child: child.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Every link must be present in both directions, without self-links,
/// duplicates, or empty lists.
fn verify_link_symmetry(state: &HierarchyState) -> Result<(), InvariantViolation> {
    for (from, targets) in state.link_entries() {
        if targets.is_empty() {
            return Err(InvariantViolation::EmptyAdjacencyList(from.clone()));
        }
        let mut seen: HashSet<&TaskId> = HashSet::new();
        for to in targets {
            if to == from {
                return Err(InvariantViolation::SelfReference(from.clone()));
            }
            if !seen.insert(to) {
                return Err(InvariantViolation::DuplicateLinkListing {
                    from: from.clone(),
                    to: to.clone(),
                });
            }
            if !state.links_of(to).contains(from) {
                return Err(InvariantViolation::AsymmetricLink {
                    from: from.clone(),
                    to: to.clone(),
                });
            }
        }
    }
    Ok(())
}

/// No task may be its own ancestor.
fn verify_acyclic(state: &HierarchyState) -> Result<(), InvariantViolation> {
    for (start, _) in state.parent_entries() {
        let mut visited: HashSet<&TaskId> = HashSet::new();
        let mut current = Some(start);
        while let Some(id) = current {
            if !visited.insert(id) {
                return Err(InvariantViolation::AncestryCycle(start.clone()));
            }
            current = state.parent_of(id);
        }
    }
    Ok(())
}
