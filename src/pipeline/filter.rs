//! Task visibility filtering.

use crate::task::domain::{CareJourneyId, IssueType, Task, TaskPriority, TaskStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Criteria selecting which tasks a view shows.
///
/// A task passes when it satisfies the conjunction of every non-empty
/// dimension; an empty set or search string places no constraint on that
/// dimension. The search term matches case-insensitively as a substring of
/// the patient name, the description, or the ticket number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    search: String,
    priorities: Vec<TaskPriority>,
    issue_types: Vec<IssueType>,
    statuses: Vec<TaskStatus>,
    date_range: Option<(NaiveDate, NaiveDate)>,
    care_journey_id: Option<CareJourneyId>,
}

impl FilterCriteria {
    /// Creates criteria that pass every task.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the free-text search term.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Adds a priority to the accepted set.
    #[must_use]
    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        if !self.priorities.contains(&priority) {
            self.priorities.push(priority);
        }
        self
    }

    /// Adds an issue type to the accepted set.
    #[must_use]
    pub fn with_issue_type(mut self, issue_type: IssueType) -> Self {
        if !self.issue_types.contains(&issue_type) {
            self.issue_types.push(issue_type);
        }
        self
    }

    /// Adds a status to the accepted set.
    #[must_use]
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        if !self.statuses.contains(&status) {
            self.statuses.push(status);
        }
        self
    }

    /// Restricts to tasks due between `start` and `end` inclusive.
    ///
    /// Tasks without a due date never pass a date-constrained filter.
    #[must_use]
    pub const fn with_date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.date_range = Some((start, end));
        self
    }

    /// Restricts to tasks labelled with one care journey.
    #[must_use]
    pub fn with_care_journey(mut self, care_journey_id: CareJourneyId) -> Self {
        self.care_journey_id = Some(care_journey_id);
        self
    }

    /// Reports whether one task passes these criteria.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.matches_search(task)
            && self.matches_set(task)
            && self.matches_date(task)
            && self.matches_journey(task)
    }

    fn matches_search(&self, task: &Task) -> bool {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        task.patient_name().to_lowercase().contains(&needle)
            || task.description().to_lowercase().contains(&needle)
            || task
                .ticket_number()
                .as_str()
                .to_lowercase()
                .contains(&needle)
    }

    fn matches_set(&self, task: &Task) -> bool {
        (self.priorities.is_empty() || self.priorities.contains(&task.priority()))
            && (self.issue_types.is_empty() || self.issue_types.contains(&task.issue_type()))
            && (self.statuses.is_empty() || self.statuses.contains(task.status()))
    }

    fn matches_date(&self, task: &Task) -> bool {
        match self.date_range {
            Some((start, end)) => task
                .due_date()
                .is_some_and(|due| start <= due && due <= end),
            None => true,
        }
    }

    fn matches_journey(&self, task: &Task) -> bool {
        match &self.care_journey_id {
            Some(journey) => task.care_journey_id() == Some(journey),
            None => true,
        }
    }
}

/// Selects the visible tasks, preserving input order.
///
/// Pure and idempotent: filtering an already-filtered list with the same
/// criteria returns it unchanged.
#[must_use]
pub fn filter_tasks(tasks: &[Task], criteria: &FilterCriteria) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| criteria.matches(task))
        .cloned()
        .collect()
}
