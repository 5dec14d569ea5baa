//! Loosely-typed mirror of the bundled patient dataset rows.

use serde::Deserialize;

/// One raw row from the bundled patient dataset.
///
/// Every field is optional; validation decides which absences are defects
/// and which fall back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawTaskRecord {
    /// Task identifier.
    #[serde(default)]
    pub id: Option<String>,
    /// Human-facing ticket number.
    #[serde(default)]
    pub ticket_number: Option<String>,
    /// Patient display name.
    #[serde(default)]
    pub patient_name: Option<String>,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Workflow status string.
    #[serde(default)]
    pub status: Option<String>,
    /// Priority string.
    #[serde(default)]
    pub priority: Option<String>,
    /// Issue type string.
    #[serde(default)]
    pub issue_type: Option<String>,
    /// Due date as a `YYYY-MM-DD` string.
    #[serde(default)]
    pub due_date: Option<String>,
    /// Creation date as a `YYYY-MM-DD` string.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last-update date as a `YYYY-MM-DD` string.
    #[serde(default)]
    pub updated_at: Option<String>,
    /// Stakeholder contact rows.
    #[serde(default)]
    pub stakeholders: Vec<RawStakeholder>,
    /// Parent task hint.
    #[serde(default)]
    pub parent_task_id: Option<String>,
    /// Care journey label.
    #[serde(default)]
    pub care_journey_id: Option<String>,
}

/// One raw stakeholder row nested in a dataset record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawStakeholder {
    /// Stakeholder identifier.
    #[serde(default)]
    pub id: Option<String>,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Role string.
    #[serde(default)]
    pub role: Option<String>,
    /// Contact detail.
    #[serde(default)]
    pub contact: Option<String>,
}
