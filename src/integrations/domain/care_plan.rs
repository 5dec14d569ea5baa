//! Care-plan agent payloads and results.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Form fields the clinician filled in before generating a care plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarePlanForm {
    /// Patient display name.
    pub patient_name: String,
    /// Current medication list.
    #[serde(default)]
    pub medications: Vec<String>,
    /// Active diagnoses.
    #[serde(default)]
    pub diagnoses: Vec<String>,
    /// Goals the plan should work toward.
    #[serde(default)]
    pub care_goals: Vec<String>,
}

/// Result of the medication-reconciliation agent call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationReconciliation {
    /// Narrative reconciliation produced by the agent.
    pub reconciliation: String,
    /// Label data the agent reasoned over, echoed back verbatim.
    #[serde(default)]
    pub original_data: Value,
}

/// Result of the research-analysis agent call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchAnalysis {
    /// Narrative summary of the literature.
    pub summary: String,
    /// Key findings pulled out of the articles.
    #[serde(default)]
    pub key_findings: Vec<String>,
    /// Formatted citations.
    #[serde(default)]
    pub citations: Vec<String>,
    /// Literature data the agent reasoned over, echoed back verbatim.
    #[serde(default)]
    pub original_data: Value,
}

/// Body of the component-generation agent call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateComponentRequest {
    /// Clinician-entered form fields.
    pub form_data: CarePlanForm,
    /// Upstream reconciliation result.
    pub medication_reconciliation: MedicationReconciliation,
    /// Upstream research analysis result.
    pub research_analysis: ResearchAnalysis,
}

/// Generated care-plan component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedComponent {
    /// Source of the generated component.
    pub component_code: String,
}

/// Final outcome of a care-plan generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarePlanOutcome {
    /// Component to render.
    pub component: GeneratedComponent,
    /// `true` when the agent call failed and the stock fallback component
    /// was substituted.
    pub degraded: bool,
}
