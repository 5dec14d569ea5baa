//! Error types for relationship store transitions and invariant checks.

use crate::task::domain::TaskId;
use thiserror::Error;

/// Errors returned by relationship store transitions.
///
/// Every other transition is a total function over possibly-missing keys;
/// only self-references and ancestry cycles are rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HierarchyError {
    /// A task cannot be its own parent.
    #[error("task {0} cannot be its own parent")]
    SelfParent(TaskId),

    /// The requested parent assignment would make a task its own ancestor.
    #[error("making {child} a child of {parent} would create a cycle")]
    WouldCreateCycle {
        /// Task being reparented.
        child: TaskId,
        /// Requested parent.
        parent: TaskId,
    },

    /// A task cannot link to itself.
    #[error("task {0} cannot link to itself")]
    SelfLink(TaskId),
}

/// Violations reported by the debug invariant pass.
///
/// Production transitions cannot produce these; they exist to catch
/// hand-seeded test states and future regressions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvariantViolation {
    /// A parent entry has no matching children listing.
    #[error("child {child} maps to parent {parent} but is missing from its children list")]
    MissingChildListing {
        /// Child with the parent entry.
        child: TaskId,
        /// Parent whose children list lacks the child.
        parent: TaskId,
    },

    /// A children listing has no matching parent entry.
    #[error("children list of {parent} names {child} without a matching parent entry")]
    OrphanChildListing {
        /// Parent owning the children list.
        parent: TaskId,
        /// Child listed without a parent entry.
        child: TaskId,
    },

    /// A child appears more than once in one children list.
    #[error("child {child} listed more than once under {parent}")]
    DuplicateChildListing {
        /// Parent owning the children list.
        parent: TaskId,
        /// Child listed repeatedly.
        child: TaskId,
    },

    /// An adjacency list is empty instead of absent.
    #[error("empty adjacency list retained for {0}")]
    EmptyAdjacencyList(TaskId),

    /// A link lacks its reverse direction.
    #[error("link {from} -> {to} has no reverse entry")]
    AsymmetricLink {
        /// Side holding the link.
        from: TaskId,
        /// Side missing the reverse link.
        to: TaskId,
    },

    /// A link target appears more than once in one link list.
    #[error("link {from} -> {to} listed more than once")]
    DuplicateLinkListing {
        /// Side holding the duplicated link.
        from: TaskId,
        /// Duplicated target.
        to: TaskId,
    },

    /// A task is linked or parented to itself.
    #[error("task {0} references itself")]
    SelfReference(TaskId),

    /// A task is its own ancestor.
    #[error("task {0} is its own ancestor")]
    AncestryCycle(TaskId),
}
