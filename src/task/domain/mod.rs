//! Domain model for patient care tasks.
//!
//! The task domain models care tickets, their classification enums, and the
//! stakeholders attached to each ticket while keeping infrastructure
//! concerns outside of the domain boundary. Parent/child and linked-task
//! relationships are deliberately *not* owned here; the
//! [`crate::hierarchy`] store is the single authority for them, and the
//! `parent_task_id` carried on a task record is a seed-time hint only.

mod error;
mod ids;
mod stakeholder;
mod task;

pub use error::TaskDomainError;
pub use ids::{CareJourneyId, StakeholderId, TaskId, TicketNumber};
pub use stakeholder::{Stakeholder, StakeholderRole};
pub use task::{IssueType, PersistedTaskData, Task, TaskPriority, TaskSeed, TaskStatus};
