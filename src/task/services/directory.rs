//! Service layer for creating, reclassifying, and removing care tasks.

use crate::hierarchy::domain::HierarchyState;
use crate::task::{
    domain::{
        CareJourneyId, IssueType, Stakeholder, StakeholderId, StakeholderRole, Task,
        TaskDomainError, TaskId, TaskPriority, TaskSeed, TaskStatus, TicketNumber,
    },
    ports::{TaskRepository, TaskRepositoryError},
    validation::{RawTaskRecord, RecordValidationError, validate_records},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Raw stakeholder fields carried by a creation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StakeholderInput {
    /// Stakeholder identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Role string (`provider`, `guardian`, `facility`, `health_plan`).
    pub role: String,
    /// Free-form contact detail.
    pub contact: String,
}

/// Request payload for creating a care task from raw field values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    id: String,
    ticket_number: String,
    patient_name: String,
    priority: String,
    issue_type: String,
    description: Option<String>,
    status: Option<String>,
    due_date: Option<NaiveDate>,
    care_journey_id: Option<String>,
    stakeholders: Vec<StakeholderInput>,
}

impl CreateTaskRequest {
    /// Creates a request with required task fields.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        ticket_number: impl Into<String>,
        patient_name: impl Into<String>,
        priority: impl Into<String>,
        issue_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            ticket_number: ticket_number.into(),
            patient_name: patient_name.into(),
            priority: priority.into(),
            issue_type: issue_type.into(),
            description: None,
            status: None,
            due_date: None,
            care_journey_id: None,
            stakeholders: Vec::new(),
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the initial workflow status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the care journey label.
    #[must_use]
    pub fn with_care_journey(mut self, care_journey_id: impl Into<String>) -> Self {
        self.care_journey_id = Some(care_journey_id.into());
        self
    }

    /// Appends a stakeholder contact.
    #[must_use]
    pub fn with_stakeholder(mut self, stakeholder: StakeholderInput) -> Self {
        self.stakeholders.push(stakeholder);
        self
    }
}

/// Outcome of ingesting a raw dataset into the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestReport {
    /// Ids of the tasks stored, in dataset order.
    pub stored: Vec<TaskId>,
    /// Rejected rows with the reason each was refused.
    pub rejected: Vec<RecordValidationError>,
}

/// Service-level errors for task directory operations.
#[derive(Debug, Error)]
pub enum TaskDirectoryError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task directory service operations.
pub type TaskDirectoryResult<T> = Result<T, TaskDirectoryError>;

/// Task directory orchestration service.
#[derive(Clone)]
pub struct TaskDirectoryService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskDirectoryService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task directory service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a new task from raw field values.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDirectoryError`] when input validation fails or the
    /// repository rejects the new task.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskDirectoryResult<Task> {
        let id = TaskId::new(request.id)?;
        let ticket_number = TicketNumber::new(request.ticket_number)?;
        let priority = TaskPriority::try_from(request.priority.as_str())?;
        let issue_type = IssueType::try_from(request.issue_type.as_str())?;

        let mut seed = TaskSeed::new(id, ticket_number, request.patient_name, priority, issue_type)?;
        if let Some(description) = request.description {
            seed = seed.with_description(description);
        }
        if let Some(status) = request.status {
            seed = seed.with_status(TaskStatus::from(status));
        }
        if let Some(due_date) = request.due_date {
            seed = seed.with_due_date(due_date);
        }
        if let Some(journey) = request.care_journey_id {
            seed = seed.with_care_journey(CareJourneyId::new(journey)?);
        }
        for input in request.stakeholders {
            let stakeholder = Stakeholder::new(
                StakeholderId::new(input.id)?,
                input.name,
                StakeholderRole::try_from(input.role.as_str())?,
                input.contact,
            )?;
            seed = seed.with_stakeholder(stakeholder);
        }

        let task = Task::create(seed, &*self.clock);
        self.repository.store(&task).await?;
        Ok(task)
    }

    /// Validates and stores a raw dataset, reporting rejects per row.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDirectoryError::Repository`] when storing an accepted
    /// task fails (including duplicate ids within the dataset).
    pub async fn ingest_records(
        &self,
        records: &[RawTaskRecord],
    ) -> TaskDirectoryResult<IngestReport> {
        let (tasks, rejected) = validate_records(records, &*self.clock);
        if !rejected.is_empty() {
            tracing::warn!(rejected = rejected.len(), "dataset rows failed validation");
        }
        let mut stored = Vec::with_capacity(tasks.len());
        for task in &tasks {
            self.repository.store(task).await?;
            stored.push(task.id().clone());
        }
        Ok(IngestReport { stored, rejected })
    }

    /// Moves a task to a new workflow status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDirectoryError::Repository`] when the task does not
    /// exist or the update fails.
    pub async fn change_status(
        &self,
        id: &TaskId,
        status: &str,
    ) -> TaskDirectoryResult<Task> {
        self.mutate(id, |task, clock| {
            task.set_status(TaskStatus::from(status), clock);
        })
        .await
    }

    /// Changes a task's priority.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDirectoryError::Domain`] for an unknown priority value
    /// and [`TaskDirectoryError::Repository`] when the task does not exist.
    pub async fn change_priority(
        &self,
        id: &TaskId,
        priority: &str,
    ) -> TaskDirectoryResult<Task> {
        let parsed = TaskPriority::try_from(priority)?;
        self.mutate(id, |task, clock| {
            task.set_priority(parsed, clock);
        })
        .await
    }

    /// Sets or clears a task's due date.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDirectoryError::Repository`] when the task does not
    /// exist or the update fails.
    pub async fn reschedule(
        &self,
        id: &TaskId,
        due_date: Option<NaiveDate>,
    ) -> TaskDirectoryResult<Task> {
        self.mutate(id, |task, clock| {
            task.set_due_date(due_date, clock);
        })
        .await
    }

    /// Removes a task and scrubs it from the relationship store.
    ///
    /// The repository and the hierarchy store are not transactionally
    /// coupled: if the repository removal succeeds the scrubbed hierarchy is
    /// returned, and any references the caller failed to persist simply
    /// become dangling ids that the accessors drop.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDirectoryError::Repository`] when the task does not
    /// exist.
    pub async fn remove_task(
        &self,
        id: &TaskId,
        hierarchy: &HierarchyState,
    ) -> TaskDirectoryResult<(Task, HierarchyState)> {
        let removed = self.repository.remove(id).await?;
        let scrubbed = hierarchy.remove_task(id);
        tracing::debug!(task = %id, "removed task and scrubbed relationships");
        Ok((removed, scrubbed))
    }

    /// Returns every task in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDirectoryError::Repository`] when listing fails.
    pub async fn list_tasks(&self) -> TaskDirectoryResult<Vec<Task>> {
        Ok(self.repository.list_all().await?)
    }

    /// Retrieves a task by id.
    ///
    /// Returns `Ok(None)` when no task has that id.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDirectoryError::Repository`] when the lookup fails.
    pub async fn find_task(&self, id: &TaskId) -> TaskDirectoryResult<Option<Task>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    async fn mutate(
        &self,
        id: &TaskId,
        apply: impl FnOnce(&mut Task, &C),
    ) -> TaskDirectoryResult<Task> {
        let mut task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| TaskRepositoryError::NotFound(id.clone()))?;
        apply(&mut task, self.clock.as_ref());
        self.repository.update(&task).await?;
        Ok(task)
    }
}
