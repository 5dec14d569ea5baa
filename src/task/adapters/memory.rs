//! In-memory task repository backing the board at runtime and in tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{CareJourneyId, Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
    insertion_order: Vec<TaskId>,
    journey_index: HashMap<CareJourneyId, Vec<TaskId>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn index_journey(state: &mut InMemoryTaskState, task: &Task) {
    if let Some(journey_id) = task.care_journey_id() {
        state
            .journey_index
            .entry(journey_id.clone())
            .or_default()
            .push(task.id().clone());
    }
}

/// Removes a task id from a journey index entry, pruning the entry if empty.
fn deindex_journey(
    index: &mut HashMap<CareJourneyId, Vec<TaskId>>,
    task_id: &TaskId,
    key: &CareJourneyId,
) {
    if let Some(ids) = index.get_mut(key) {
        ids.retain(|id| id != task_id);
        if ids.is_empty() {
            index.remove(key);
        }
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TaskRepositoryError::storage(std::io::Error::other(err.to_string())))?;
        if state.tasks.contains_key(task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id().clone()));
        }

        index_journey(&mut state, task);
        state.insertion_order.push(task.id().clone());
        state.tasks.insert(task.id().clone(), task.clone());
        Ok(())
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TaskRepositoryError::storage(std::io::Error::other(err.to_string())))?;

        let old_task = state
            .tasks
            .get(task.id())
            .ok_or_else(|| TaskRepositoryError::NotFound(task.id().clone()))?
            .clone();

        // Re-key the journey index before writing the updated aggregate.
        if let Some(old_journey) = old_task.care_journey_id() {
            deindex_journey(&mut state.journey_index, task.id(), old_journey);
        }
        index_journey(&mut state, task);
        state.tasks.insert(task.id().clone(), task.clone());
        Ok(())
    }

    async fn remove(&self, id: &TaskId) -> TaskRepositoryResult<Task> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TaskRepositoryError::storage(std::io::Error::other(err.to_string())))?;

        let removed = state
            .tasks
            .remove(id)
            .ok_or_else(|| TaskRepositoryError::NotFound(id.clone()))?;
        state.insertion_order.retain(|listed| listed != id);
        if let Some(journey_id) = removed.care_journey_id() {
            let key = journey_id.clone();
            deindex_journey(&mut state.journey_index, id, &key);
        }
        Ok(removed)
    }

    async fn find_by_id(&self, id: &TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self
            .state
            .read()
            .map_err(|err| TaskRepositoryError::storage(std::io::Error::other(err.to_string())))?;
        Ok(state.tasks.get(id).cloned())
    }

    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self
            .state
            .read()
            .map_err(|err| TaskRepositoryError::storage(std::io::Error::other(err.to_string())))?;
        Ok(state
            .insertion_order
            .iter()
            .filter_map(|id| state.tasks.get(id).cloned())
            .collect())
    }

    async fn find_by_care_journey(
        &self,
        care_journey_id: &CareJourneyId,
    ) -> TaskRepositoryResult<Vec<Task>> {
        let state = self
            .state
            .read()
            .map_err(|err| TaskRepositoryError::storage(std::io::Error::other(err.to_string())))?;
        Ok(state
            .journey_index
            .get(care_journey_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| state.tasks.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default())
    }
}
