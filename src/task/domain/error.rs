//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task identifier is empty after trimming.
    #[error("task id must not be empty")]
    EmptyTaskId,

    /// The ticket number is empty or contains whitespace.
    #[error("invalid ticket number '{0}', expected a non-empty token")]
    InvalidTicketNumber(String),

    /// The patient name is empty after trimming.
    #[error("patient name must not be empty")]
    EmptyPatientName,

    /// The care journey identifier is empty after trimming.
    #[error("care journey id must not be empty")]
    EmptyCareJourneyId,

    /// The stakeholder identifier is empty after trimming.
    #[error("stakeholder id must not be empty")]
    EmptyStakeholderId,

    /// The stakeholder name is empty after trimming.
    #[error("stakeholder name must not be empty")]
    EmptyStakeholderName,

    /// The priority value is unsupported.
    #[error("unsupported priority: {0}")]
    InvalidPriority(String),

    /// The issue type value is unsupported.
    #[error("unsupported issue type: {0}")]
    InvalidIssueType(String),

    /// The stakeholder role value is unsupported.
    #[error("unsupported stakeholder role: {0}")]
    InvalidStakeholderRole(String),
}
