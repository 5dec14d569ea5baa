//! Stakeholder contacts associated with a care task.

use super::{StakeholderId, TaskDomainError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role a stakeholder plays in the patient's care.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StakeholderRole {
    /// Treating provider (physician, nurse, therapist).
    Provider,
    /// Parent or legal guardian.
    Guardian,
    /// Care facility (hospital, clinic, pharmacy).
    Facility,
    /// Health plan or payer contact.
    HealthPlan,
}

impl StakeholderRole {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Provider => "provider",
            Self::Guardian => "guardian",
            Self::Facility => "facility",
            Self::HealthPlan => "health_plan",
        }
    }
}

impl TryFrom<&str> for StakeholderRole {
    type Error = TaskDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "provider" => Ok(Self::Provider),
            "guardian" => Ok(Self::Guardian),
            "facility" => Ok(Self::Facility),
            "health_plan" => Ok(Self::HealthPlan),
            _ => Err(TaskDomainError::InvalidStakeholderRole(value.to_owned())),
        }
    }
}

impl fmt::Display for StakeholderRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Named contact attached to a care task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stakeholder {
    /// Stakeholder identifier.
    pub id: StakeholderId,
    /// Display name of the contact.
    pub name: String,
    /// Role the contact plays in the patient's care.
    pub role: StakeholderRole,
    /// Free-form contact detail (phone, email, fax).
    pub contact: String,
}

impl Stakeholder {
    /// Creates a validated stakeholder contact.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyStakeholderName`] when the name is
    /// empty after trimming.
    pub fn new(
        id: StakeholderId,
        name: impl Into<String>,
        role: StakeholderRole,
        contact: impl Into<String>,
    ) -> Result<Self, TaskDomainError> {
        let raw_name = name.into();
        let normalized = raw_name.trim();
        if normalized.is_empty() {
            return Err(TaskDomainError::EmptyStakeholderName);
        }
        Ok(Self {
            id,
            name: normalized.to_owned(),
            role,
            contact: contact.into(),
        })
    }
}
