//! Parent/child and linked-task relationship store with derived views.
//!
//! The hierarchy store is the single authority for how care tasks relate:
//! each task has at most one parent, any number of children, and any number
//! of symmetric non-hierarchical links. State transitions are pure: every
//! operation returns a new [`domain::HierarchyState`] and never mutates its
//! receiver, so views can hold cheap snapshots and recompute derived data
//! on demand.
//!
//! - Store state, actions, and invariant checks in [`domain`]
//! - Derived relationship accessors and tree assembly in [`services`]
//!
//! # Example
//!
//! ```
//! use carelane::hierarchy::domain::HierarchyState;
//! use carelane::task::domain::TaskId;
//!
//! let follow_up = TaskId::new("T-100").expect("valid id");
//! let labs = TaskId::new("T-101").expect("valid id");
//!
//! let state = HierarchyState::new()
//!     .add_child(&labs, &follow_up)
//!     .expect("no cycle");
//! assert_eq!(state.parent_of(&labs), Some(&follow_up));
//! assert_eq!(state.children_of(&follow_up), &[labs]);
//! ```

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
