//! Task aggregate root and its classification enums.

use super::{CareJourneyId, Stakeholder, TaskDomainError, TaskId, TicketNumber};
use chrono::NaiveDate;
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Workflow status of a care task.
///
/// The board treats status as an open string for forward compatibility:
/// values outside the known set are preserved verbatim in
/// [`TaskStatus::Other`] and round-trip through serialization unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskStatus {
    /// Work has not started.
    Todo,
    /// Work is underway.
    InProgress,
    /// Work is finished.
    Done,
    /// A status value this build does not know about yet.
    Other(String),
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Done => "done",
            Self::Other(value) => value,
        }
    }

    /// Returns the ordering rank used by status sorting and board columns.
    ///
    /// Unknown statuses rank after every known one.
    #[must_use]
    pub const fn ordinal(&self) -> u8 {
        match self {
            Self::Todo => 1,
            Self::InProgress => 2,
            Self::Done => 3,
            Self::Other(_) => 4,
        }
    }
}

impl From<&str> for TaskStatus {
    fn from(value: &str) -> Self {
        let normalized = value.trim();
        match normalized.to_ascii_lowercase().as_str() {
            "todo" => Self::Todo,
            "in_progress" => Self::InProgress,
            "done" => Self::Done,
            _ => Self::Other(normalized.to_owned()),
        }
    }
}

impl From<String> for TaskStatus {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<TaskStatus> for String {
    fn from(status: TaskStatus) -> Self {
        status.as_str().to_owned()
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Urgency of a care task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    /// Needs attention before anything else.
    High,
    /// Default urgency.
    Medium,
    /// Can wait.
    Low,
}

impl TaskPriority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Returns the ordering rank used by priority sorting (high ranks top).
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }
}

impl TryFrom<&str> for TaskPriority {
    type Error = TaskDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(TaskDomainError::InvalidPriority(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Category of work a care task represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    /// Clinical work on the patient's condition.
    Medical,
    /// Paperwork, referrals, authorizations.
    Administrative,
    /// Scheduled follow-up with the patient.
    FollowUp,
}

impl IssueType {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Medical => "medical",
            Self::Administrative => "administrative",
            Self::FollowUp => "follow_up",
        }
    }
}

impl TryFrom<&str> for IssueType {
    type Error = TaskDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "medical" => Ok(Self::Medical),
            "administrative" => Ok(Self::Administrative),
            "follow_up" => Ok(Self::FollowUp),
            _ => Err(TaskDomainError::InvalidIssueType(value.to_owned())),
        }
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Validated ingredients for a new task, assembled builder-style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSeed {
    id: TaskId,
    ticket_number: TicketNumber,
    patient_name: String,
    description: String,
    status: TaskStatus,
    priority: TaskPriority,
    issue_type: IssueType,
    due_date: Option<NaiveDate>,
    stakeholders: Vec<Stakeholder>,
    parent_task_id: Option<TaskId>,
    care_journey_id: Option<CareJourneyId>,
}

impl TaskSeed {
    /// Creates a seed with the required task fields.
    ///
    /// Status defaults to [`TaskStatus::Todo`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyPatientName`] when the patient name
    /// is empty after trimming.
    pub fn new(
        id: TaskId,
        ticket_number: TicketNumber,
        patient_name: impl Into<String>,
        priority: TaskPriority,
        issue_type: IssueType,
    ) -> Result<Self, TaskDomainError> {
        let raw_name = patient_name.into();
        let normalized = raw_name.trim();
        if normalized.is_empty() {
            return Err(TaskDomainError::EmptyPatientName);
        }
        Ok(Self {
            id,
            ticket_number,
            patient_name: normalized.to_owned(),
            description: String::new(),
            status: TaskStatus::Todo,
            priority,
            issue_type,
            due_date: None,
            stakeholders: Vec::new(),
            parent_task_id: None,
            care_journey_id: None,
        })
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the initial workflow status.
    #[must_use]
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Appends a stakeholder contact.
    #[must_use]
    pub fn with_stakeholder(mut self, stakeholder: Stakeholder) -> Self {
        self.stakeholders.push(stakeholder);
        self
    }

    /// Records the seed-time parent hint carried by the source record.
    ///
    /// The hierarchy store is the authority for parent/child relationships;
    /// this hint only feeds initial hierarchy seeding.
    #[must_use]
    pub fn with_parent_task(mut self, parent_task_id: TaskId) -> Self {
        self.parent_task_id = Some(parent_task_id);
        self
    }

    /// Sets the care journey label.
    #[must_use]
    pub fn with_care_journey(mut self, care_journey_id: CareJourneyId) -> Self {
        self.care_journey_id = Some(care_journey_id);
        self
    }
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    ticket_number: TicketNumber,
    patient_name: String,
    description: String,
    status: TaskStatus,
    priority: TaskPriority,
    issue_type: IssueType,
    due_date: Option<NaiveDate>,
    created_at: NaiveDate,
    updated_at: NaiveDate,
    stakeholders: Vec<Stakeholder>,
    parent_task_id: Option<TaskId>,
    care_journey_id: Option<CareJourneyId>,
}

/// Parameter object for reconstructing a task from validated records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Validated seed fields.
    pub seed: TaskSeed,
    /// Creation date carried by the source record.
    pub created_at: NaiveDate,
    /// Last-update date carried by the source record.
    pub updated_at: NaiveDate,
}

impl Task {
    /// Creates a new task, stamping creation dates from the clock.
    #[must_use]
    pub fn create(seed: TaskSeed, clock: &impl Clock) -> Self {
        let today = clock.utc().date_naive();
        Self::assemble(seed, today, today)
    }

    /// Reconstructs a task from a validated source record.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self::assemble(data.seed, data.created_at, data.updated_at)
    }

    fn assemble(seed: TaskSeed, created_at: NaiveDate, updated_at: NaiveDate) -> Self {
        Self {
            id: seed.id,
            ticket_number: seed.ticket_number,
            patient_name: seed.patient_name,
            description: seed.description,
            status: seed.status,
            priority: seed.priority,
            issue_type: seed.issue_type,
            due_date: seed.due_date,
            created_at,
            updated_at,
            stakeholders: seed.stakeholders,
            parent_task_id: seed.parent_task_id,
            care_journey_id: seed.care_journey_id,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the human-facing ticket number.
    #[must_use]
    pub const fn ticket_number(&self) -> &TicketNumber {
        &self.ticket_number
    }

    /// Returns the patient display name.
    #[must_use]
    pub fn patient_name(&self) -> &str {
        &self.patient_name
    }

    /// Returns the free-form task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the workflow status.
    #[must_use]
    pub const fn status(&self) -> &TaskStatus {
        &self.status
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the issue type.
    #[must_use]
    pub const fn issue_type(&self) -> IssueType {
        self.issue_type
    }

    /// Returns the due date, if one is set.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the creation date.
    #[must_use]
    pub const fn created_at(&self) -> NaiveDate {
        self.created_at
    }

    /// Returns the date of the most recent change.
    #[must_use]
    pub const fn updated_at(&self) -> NaiveDate {
        self.updated_at
    }

    /// Returns the stakeholder contacts in attachment order.
    #[must_use]
    pub fn stakeholders(&self) -> &[Stakeholder] {
        &self.stakeholders
    }

    /// Returns the seed-time parent hint, if the source record carried one.
    #[must_use]
    pub const fn parent_task_id(&self) -> Option<&TaskId> {
        self.parent_task_id.as_ref()
    }

    /// Returns the care journey label, if any.
    #[must_use]
    pub const fn care_journey_id(&self) -> Option<&CareJourneyId> {
        self.care_journey_id.as_ref()
    }

    /// Moves the task to a new workflow status.
    pub fn set_status(&mut self, status: TaskStatus, clock: &impl Clock) {
        self.status = status;
        self.touch(clock);
    }

    /// Changes the task priority.
    pub fn set_priority(&mut self, priority: TaskPriority, clock: &impl Clock) {
        self.priority = priority;
        self.touch(clock);
    }

    /// Sets or clears the due date.
    pub fn set_due_date(&mut self, due_date: Option<NaiveDate>, clock: &impl Clock) {
        self.due_date = due_date;
        self.touch(clock);
    }

    /// Appends a stakeholder contact; replaces any existing entry with the
    /// same id.
    pub fn upsert_stakeholder(&mut self, stakeholder: Stakeholder, clock: &impl Clock) {
        self.stakeholders
            .retain(|existing| existing.id != stakeholder.id);
        self.stakeholders.push(stakeholder);
        self.touch(clock);
    }

    /// Removes the stakeholder with the given id; ignores unknown ids.
    pub fn remove_stakeholder(&mut self, id: &super::StakeholderId, clock: &impl Clock) {
        self.stakeholders.retain(|existing| &existing.id != id);
        self.touch(clock);
    }

    /// Updates the `updated_at` date to the current clock date.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc().date_naive();
    }
}
