//! Filter, sort, and group stages shared by every board view.
//!
//! All three stages are pure functions over task snapshots. Each view
//! composes them as `group(sort(filter(tasks)))`; the board and calendar
//! views add one more bucketing predicate per column or date cell on top of
//! the shared pipeline, never a pipeline of their own.

mod filter;
mod group;
mod sort;
mod view;

pub use filter::{FilterCriteria, filter_tasks};
pub use group::{GroupKey, TaskGroup, group_tasks};
pub use sort::{SortDirection, SortKey, sort_tasks};
pub use view::{BoardColumn, CalendarBucket, ViewMode, board_columns, calendar_buckets, list_view};

#[cfg(test)]
mod tests;
