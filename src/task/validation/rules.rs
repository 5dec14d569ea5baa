//! Validation rules turning raw dataset rows into task aggregates.

use super::{RawStakeholder, RawTaskRecord};
use crate::task::domain::{
    CareJourneyId, IssueType, PersistedTaskData, Stakeholder, StakeholderId, StakeholderRole, Task,
    TaskDomainError, TaskId, TaskPriority, TaskSeed, TaskStatus, TicketNumber,
};
use chrono::NaiveDate;
use mockable::Clock;
use thiserror::Error;

/// Date format used by the bundled dataset.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors describing why a raw dataset row was rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordValidationError {
    /// The row carries no task id.
    #[error("record {index}: missing task id")]
    MissingId {
        /// Zero-based row position in the dataset.
        index: usize,
    },

    /// The row carries no patient name.
    #[error("record {index}: missing patient name")]
    MissingPatientName {
        /// Zero-based row position in the dataset.
        index: usize,
    },

    /// A date field does not parse as `YYYY-MM-DD`.
    #[error("record {index}: invalid {field} date '{value}'")]
    InvalidDate {
        /// Zero-based row position in the dataset.
        index: usize,
        /// Name of the offending field.
        field: &'static str,
        /// Raw value found in the row.
        value: String,
    },

    /// A field failed domain validation.
    #[error("record {index}: {source}")]
    Domain {
        /// Zero-based row position in the dataset.
        index: usize,
        /// Underlying domain error.
        #[source]
        source: TaskDomainError,
    },
}

impl RecordValidationError {
    const fn domain(index: usize, source: TaskDomainError) -> Self {
        Self::Domain { index, source }
    }
}

/// Validates a whole dataset, splitting well-formed tasks from rejects.
///
/// Row order is preserved among the accepted tasks. Rows missing
/// `created_at`/`updated_at` are stamped from the clock rather than
/// rejected, matching how the board treats freshly-entered tickets.
#[must_use]
pub fn validate_records(
    records: &[RawTaskRecord],
    clock: &impl Clock,
) -> (Vec<Task>, Vec<RecordValidationError>) {
    let mut tasks = Vec::with_capacity(records.len());
    let mut rejects = Vec::new();
    for (index, record) in records.iter().enumerate() {
        match validate_record(index, record, clock) {
            Ok(task) => tasks.push(task),
            Err(error) => rejects.push(error),
        }
    }
    (tasks, rejects)
}

/// Validates one raw row into a task aggregate.
///
/// # Errors
///
/// Returns a [`RecordValidationError`] naming the first defect found:
/// missing id or patient name, unparseable dates, or invalid enum values.
/// Absent `status`/`priority`/`issue_type` fall back to
/// `todo`/`medium`/`administrative`.
pub fn validate_record(
    index: usize,
    record: &RawTaskRecord,
    clock: &impl Clock,
) -> Result<Task, RecordValidationError> {
    let raw_id = non_empty(record.id.as_deref())
        .ok_or(RecordValidationError::MissingId { index })?;
    let raw_name = non_empty(record.patient_name.as_deref())
        .ok_or(RecordValidationError::MissingPatientName { index })?;

    let id = TaskId::new(raw_id).map_err(|source| RecordValidationError::domain(index, source))?;
    let ticket_number = TicketNumber::new(
        non_empty(record.ticket_number.as_deref()).unwrap_or(raw_id),
    )
    .map_err(|source| RecordValidationError::domain(index, source))?;

    let priority = match record.priority.as_deref() {
        Some(value) => TaskPriority::try_from(value)
            .map_err(|source| RecordValidationError::domain(index, source))?,
        None => TaskPriority::Medium,
    };
    let issue_type = match record.issue_type.as_deref() {
        Some(value) => IssueType::try_from(value)
            .map_err(|source| RecordValidationError::domain(index, source))?,
        None => IssueType::Administrative,
    };
    let status = record
        .status
        .as_deref()
        .map_or(TaskStatus::Todo, TaskStatus::from);

    let mut seed = TaskSeed::new(id, ticket_number, raw_name, priority, issue_type)
        .map_err(|source| RecordValidationError::domain(index, source))?
        .with_status(status);

    if let Some(description) = non_empty(record.description.as_deref()) {
        seed = seed.with_description(description);
    }
    if let Some(due_date) = parse_date(index, "due_date", record.due_date.as_deref())? {
        seed = seed.with_due_date(due_date);
    }
    if let Some(parent_id) = non_empty(record.parent_task_id.as_deref()) {
        let parent = TaskId::new(parent_id)
            .map_err(|source| RecordValidationError::domain(index, source))?;
        seed = seed.with_parent_task(parent);
    }
    if let Some(journey) = non_empty(record.care_journey_id.as_deref()) {
        let journey_id = CareJourneyId::new(journey)
            .map_err(|source| RecordValidationError::domain(index, source))?;
        seed = seed.with_care_journey(journey_id);
    }
    for raw_stakeholder in &record.stakeholders {
        if let Some(stakeholder) = validate_stakeholder(index, raw_stakeholder)? {
            seed = seed.with_stakeholder(stakeholder);
        }
    }

    let today = clock.utc().date_naive();
    let created_at =
        parse_date(index, "created_at", record.created_at.as_deref())?.unwrap_or(today);
    let updated_at =
        parse_date(index, "updated_at", record.updated_at.as_deref())?.unwrap_or(created_at);

    Ok(Task::from_persisted(PersistedTaskData {
        seed,
        created_at,
        updated_at,
    }))
}

/// Validates one nested stakeholder row.
///
/// Rows with neither id nor name are treated as padding and skipped; rows
/// with a bad role are rejected.
fn validate_stakeholder(
    index: usize,
    raw: &RawStakeholder,
) -> Result<Option<Stakeholder>, RecordValidationError> {
    let Some(raw_id) = non_empty(raw.id.as_deref()) else {
        return Ok(None);
    };
    let Some(raw_name) = non_empty(raw.name.as_deref()) else {
        return Ok(None);
    };
    let id = StakeholderId::new(raw_id)
        .map_err(|source| RecordValidationError::domain(index, source))?;
    let role = match raw.role.as_deref() {
        Some(value) => StakeholderRole::try_from(value)
            .map_err(|source| RecordValidationError::domain(index, source))?,
        None => StakeholderRole::Provider,
    };
    let stakeholder = Stakeholder::new(id, raw_name, role, raw.contact.clone().unwrap_or_default())
        .map_err(|source| RecordValidationError::domain(index, source))?;
    Ok(Some(stakeholder))
}

fn parse_date(
    index: usize,
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<NaiveDate>, RecordValidationError> {
    let Some(raw) = non_empty(value) else {
        return Ok(None);
    };
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map(Some)
        .map_err(|_| RecordValidationError::InvalidDate {
            index,
            field,
            value: raw.to_owned(),
        })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|trimmed| !trimmed.is_empty())
}
