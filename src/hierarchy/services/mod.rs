//! Derived relationship views computed from store snapshots.

mod related;
mod tree;

pub use related::{RelatedTasks, related_tasks};
pub use tree::{TaskTreeNode, build_task_tree};
