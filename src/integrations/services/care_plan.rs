//! Care-plan generation pipeline over the three gateways.

use crate::integrations::domain::{
    CarePlanForm, CarePlanOutcome, GenerateComponentRequest, GeneratedComponent,
};
use crate::integrations::ports::{
    CareAgentGateway, DrugLabelGateway, GatewayError, LiteratureGateway,
};
use std::sync::Arc;
use thiserror::Error;

/// Stock component substituted when the generation agent is unreachable,
/// keeping the form usable for demos while the failure is logged.
const FALLBACK_COMPONENT_CODE: &str = "\
export function CarePlanCard({ patientName }) {
  return (
    <section className=\"care-plan-card\">
      <h2>Care plan for {patientName}</h2>
      <p>The care-plan service is unavailable; showing the standard template.</p>
    </section>
  );
}
";

/// Errors surfaced to the care-plan form.
#[derive(Debug, Error)]
pub enum CarePlanError {
    /// A gateway call failed before the fallback point.
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// Assembling a raw payload for the agent failed.
    #[error("payload assembly failed: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Care-plan generation service composing the three gateways.
#[derive(Clone)]
pub struct CarePlanService<D, L, A>
where
    D: DrugLabelGateway,
    L: LiteratureGateway,
    A: CareAgentGateway,
{
    labels: Arc<D>,
    literature: Arc<L>,
    agent: Arc<A>,
}

impl<D, L, A> CarePlanService<D, L, A>
where
    D: DrugLabelGateway,
    L: LiteratureGateway,
    A: CareAgentGateway,
{
    /// Number of literature results pulled into the analysis step.
    const RESEARCH_PAGE_SIZE: u32 = 5;

    /// Creates the service over the three gateways.
    #[must_use]
    pub const fn new(labels: Arc<D>, literature: Arc<L>, agent: Arc<A>) -> Self {
        Self {
            labels,
            literature,
            agent,
        }
    }

    /// Runs the full generation pipeline for one form submission.
    ///
    /// Label lookup, literature search, reconciliation, and analysis
    /// failures are surfaced to the form as errors. Only the final
    /// component-generation call degrades instead of failing: its error is
    /// logged and the stock fallback component is returned with
    /// `degraded = true`.
    ///
    /// # Errors
    ///
    /// Returns [`CarePlanError`] for any failure before the fallback point.
    pub async fn generate(
        &self,
        form: CarePlanForm,
        drug_query: &str,
        research_term: &str,
    ) -> Result<CarePlanOutcome, CarePlanError> {
        let sections = self.labels.fetch_label(drug_query).await?;
        let label_payload = serde_json::to_value(&sections)?;
        let reconciliation = self.agent.reconcile_medications(&label_payload).await?;

        let articles = self
            .literature
            .search(research_term, Self::RESEARCH_PAGE_SIZE)
            .await?;
        let literature_payload = serde_json::to_value(&articles)?;
        let analysis = self.agent.analyze_research(&literature_payload).await?;

        let request = GenerateComponentRequest {
            form_data: form,
            medication_reconciliation: reconciliation,
            research_analysis: analysis,
        };
        match self.agent.generate_component(&request).await {
            Ok(component) => Ok(CarePlanOutcome {
                component,
                degraded: false,
            }),
            Err(error) => {
                tracing::warn!(%error, "component generation failed, using fallback");
                Ok(CarePlanOutcome {
                    component: GeneratedComponent {
                        component_code: FALLBACK_COMPONENT_CODE.to_owned(),
                    },
                    degraded: true,
                })
            }
        }
    }
}
