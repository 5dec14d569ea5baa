//! Reducer-style actions over the relationship store.

use super::{HierarchyError, HierarchyState};
use crate::task::domain::TaskId;
use serde::{Deserialize, Serialize};

/// One dispatchable transition of the relationship store.
///
/// Views dispatch actions rather than calling transitions directly so that
/// every state change funnels through [`HierarchyState::apply`] in dispatch
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HierarchyAction {
    /// Make `child` a subtask of `parent`.
    AddChild {
        /// Task being attached.
        child: TaskId,
        /// New parent.
        parent: TaskId,
    },
    /// Detach `child` from `parent`.
    RemoveChild {
        /// Task being detached.
        child: TaskId,
        /// Parent to detach from.
        parent: TaskId,
    },
    /// Detach `child` from whatever parent it has.
    RemoveParent {
        /// Task being detached.
        child: TaskId,
    },
    /// Link two tasks symmetrically.
    LinkTasks {
        /// One side of the link.
        a: TaskId,
        /// Other side of the link.
        b: TaskId,
    },
    /// Remove the link between two tasks.
    UnlinkTasks {
        /// One side of the link.
        a: TaskId,
        /// Other side of the link.
        b: TaskId,
    },
    /// Purge every trace of a task.
    RemoveTask {
        /// Task being purged.
        id: TaskId,
    },
    /// Replace the whole store state.
    Initialize {
        /// Replacement state.
        state: HierarchyState,
    },
}

impl HierarchyState {
    /// Applies one action, returning the successor state.
    ///
    /// # Errors
    ///
    /// Returns [`HierarchyError`] for the rejecting transitions
    /// ([`HierarchyAction::AddChild`] and [`HierarchyAction::LinkTasks`]);
    /// every other action is total.
    pub fn apply(&self, action: HierarchyAction) -> Result<Self, HierarchyError> {
        match action {
            HierarchyAction::AddChild { child, parent } => self.add_child(&child, &parent),
            HierarchyAction::RemoveChild { child, parent } => {
                Ok(self.remove_child(&child, &parent))
            }
            HierarchyAction::RemoveParent { child } => Ok(self.remove_parent(&child)),
            HierarchyAction::LinkTasks { a, b } => self.link_tasks(&a, &b),
            HierarchyAction::UnlinkTasks { a, b } => Ok(self.unlink_tasks(&a, &b)),
            HierarchyAction::RemoveTask { id } => Ok(self.remove_task(&id)),
            HierarchyAction::Initialize { state } => Ok(state),
        }
    }
}
