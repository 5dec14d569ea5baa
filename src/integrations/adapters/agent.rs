//! Care-agent service client.

use super::ensure_success;
use crate::integrations::domain::{
    GenerateComponentRequest, GeneratedComponent, MedicationReconciliation, ResearchAnalysis,
};
use crate::integrations::ports::{CareAgentGateway, GatewayError, GatewayResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

/// Connection settings for the care-agent service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentServiceConfig {
    /// Backend origin the agent endpoints live under.
    pub base_url: String,
}

/// Care-agent gateway backed by the `/api/agents/` endpoints.
#[derive(Debug, Clone)]
pub struct AgentServiceClient {
    client: Client,
    config: AgentServiceConfig,
}

impl AgentServiceClient {
    /// Creates a client over the given configuration.
    #[must_use]
    pub fn new(config: AgentServiceConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    async fn post<B, T>(&self, endpoint: &str, body: &B) -> GatewayResult<T>
    where
        B: Serialize + Sync,
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}/api/agents/{endpoint}", self.config.base_url);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(GatewayError::transport)?;
        ensure_success(&response)?;
        response
            .json()
            .await
            .map_err(|err| GatewayError::Decode(err.to_string()))
    }
}

#[async_trait]
impl CareAgentGateway for AgentServiceClient {
    async fn reconcile_medications(
        &self,
        label_data: &Value,
    ) -> GatewayResult<MedicationReconciliation> {
        self.post("medication-reconciliation", label_data).await
    }

    async fn analyze_research(&self, literature: &Value) -> GatewayResult<ResearchAnalysis> {
        self.post("research-analysis", literature).await
    }

    async fn generate_component(
        &self,
        request: &GenerateComponentRequest,
    ) -> GatewayResult<GeneratedComponent> {
        self.post("generate-component", request).await
    }
}
