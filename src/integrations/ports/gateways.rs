//! Trait contracts for the drug-label, literature, and care-agent services.

use crate::integrations::domain::{
    ArticleSummary, GenerateComponentRequest, GeneratedComponent, LabelSection, LiteratureSearch,
    MedicationReconciliation, ResearchAnalysis,
};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// Result type for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Errors returned by gateway implementations.
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// The service answered with a non-success status.
    #[error("service returned {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Status text carried to the issuing form.
        message: String,
    },

    /// The request never completed (connection, DNS, timeout).
    #[error("transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The response body did not match the expected shape.
    #[error("unexpected response shape: {0}")]
    Decode(String),
}

impl GatewayError {
    /// Wraps a transport-level error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}

/// Drug-label lookup contract.
#[async_trait]
pub trait DrugLabelGateway: Send + Sync {
    /// Fetches the best-matching label and transforms it into renderable
    /// sections, in catalogue order, skipping sections the label lacks.
    ///
    /// An unmatched search yields an empty section list, not an error.
    async fn fetch_label(&self, search: &str) -> GatewayResult<Vec<LabelSection>>;
}

/// Literature search contract against the PubMed proxy.
#[async_trait]
pub trait LiteratureGateway: Send + Sync {
    /// Searches for articles matching a term.
    async fn search(&self, term: &str, max_results: u32) -> GatewayResult<LiteratureSearch>;

    /// Fetches the full summary of one article.
    async fn details(&self, uid: &str) -> GatewayResult<ArticleSummary>;

    /// Fetches articles related to one article.
    async fn related(&self, uid: &str) -> GatewayResult<LiteratureSearch>;

    /// Fetches a formatted citation for one article.
    async fn citation(&self, uid: &str) -> GatewayResult<String>;
}

/// Care-agent service contract.
#[async_trait]
pub trait CareAgentGateway: Send + Sync {
    /// Runs medication reconciliation over raw label-shaped data.
    async fn reconcile_medications(
        &self,
        label_data: &Value,
    ) -> GatewayResult<MedicationReconciliation>;

    /// Runs research analysis over raw literature-shaped data.
    async fn analyze_research(&self, literature: &Value) -> GatewayResult<ResearchAnalysis>;

    /// Generates the care-plan component from the assembled inputs.
    async fn generate_component(
        &self,
        request: &GenerateComponentRequest,
    ) -> GatewayResult<GeneratedComponent>;
}
