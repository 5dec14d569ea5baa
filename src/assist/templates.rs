//! Fixed reply templates expanded over task fields.

use super::AssistError;
use crate::hierarchy::services::RelatedTasks;
use crate::task::domain::Task;
use minijinja::{Environment, context};

/// Which canned reply the panel asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKind {
    /// Narrative summary of the task and its related work.
    CarePlanSummary,
    /// One-line triage recommendation.
    TriageSuggestion,
}

impl ReplyKind {
    const fn template_name(self) -> &'static str {
        match self {
            Self::CarePlanSummary => "care_plan_summary",
            Self::TriageSuggestion => "triage_suggestion",
        }
    }
}

const CARE_PLAN_SUMMARY: &str = "\
Here is a care-plan summary for {{ task.patient_name }} (ticket {{ task.ticket_number }}).

Current focus: {{ task.description }}
Status: {{ task.status }}, priority {{ task.priority }}\
{% if task.due_date %}, due {{ task.due_date }}{% endif %}.
{% if related.child_tasks %}
Open subtasks:
{% for child in related.child_tasks %}- {{ child.ticket_number }}: {{ child.description }} ({{ child.status }})
{% endfor %}{% endif %}\
{% if related.linked_tasks %}
Related work:
{% for linked in related.linked_tasks %}- {{ linked.ticket_number }}: {{ linked.description }}
{% endfor %}{% endif %}";

const TRIAGE_SUGGESTION: &str = "\
Suggested triage for ticket {{ task.ticket_number }}: treat as \
{{ task.priority }}-priority {{ task.issue_type }} work\
{% if task.due_date %} and aim to close it by {{ task.due_date }}{% endif %}.\
{% if related.parent_task %} It belongs to \"{{ related.parent_task.description }}\".{% endif %}";

/// Renders canned assistant replies from task fields.
pub struct ReplyComposer {
    env: Environment<'static>,
}

impl ReplyComposer {
    /// Builds the composer with every reply template registered.
    ///
    /// # Errors
    ///
    /// Returns [`AssistError::Template`] when a template fails to parse;
    /// this only happens if a template constant is edited into invalid
    /// syntax.
    pub fn new() -> Result<Self, AssistError> {
        let mut env = Environment::new();
        env.add_template(ReplyKind::CarePlanSummary.template_name(), CARE_PLAN_SUMMARY)?;
        env.add_template(ReplyKind::TriageSuggestion.template_name(), TRIAGE_SUGGESTION)?;
        Ok(Self { env })
    }

    /// Expands one reply over a task and its resolved relationships.
    ///
    /// # Errors
    ///
    /// Returns [`AssistError::Template`] when rendering fails.
    pub fn compose(
        &self,
        kind: ReplyKind,
        task: &Task,
        related: &RelatedTasks,
    ) -> Result<String, AssistError> {
        let template = self.env.get_template(kind.template_name())?;
        let rendered = template.render(context! { task => task, related => related })?;
        Ok(rendered)
    }
}
