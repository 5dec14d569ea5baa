//! PubMed proxy client.
//!
//! The product backend fronts PubMed behind one endpoint that multiplexes
//! on an `action` query parameter; this client speaks that shape.

use super::ensure_success;
use crate::integrations::domain::{ArticleSummary, LiteratureSearch};
use crate::integrations::ports::{GatewayError, GatewayResult, LiteratureGateway};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// Connection settings for the PubMed proxy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PubMedProxyConfig {
    /// Backend origin the proxy lives under.
    pub base_url: String,
}

/// Literature gateway backed by the backend's PubMed proxy.
#[derive(Debug, Clone)]
pub struct PubMedProxyClient {
    client: Client,
    config: PubMedProxyConfig,
}

/// Body of the `citation` action.
#[derive(Debug, Deserialize)]
struct CitationResponse {
    citation: String,
}

impl PubMedProxyClient {
    /// Creates a client over the given configuration.
    #[must_use]
    pub fn new(config: PubMedProxyConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    async fn fetch<T>(&self, query: &[(&str, &str)]) -> GatewayResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}/api/pubmed", self.config.base_url);
        let response = self
            .client
            .get(&url)
            .query(query)
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
impl LiteratureGateway for PubMedProxyClient {
    async fn search(&self, term: &str, max_results: u32) -> GatewayResult<LiteratureSearch> {
        let retmax = max_results.to_string();
        self.fetch(&[("action", "search"), ("term", term), ("retmax", &retmax)])
            .await
    }

    async fn details(&self, uid: &str) -> GatewayResult<ArticleSummary> {
        self.fetch(&[("action", "details"), ("uid", uid)]).await
    }

    async fn related(&self, uid: &str) -> GatewayResult<LiteratureSearch> {
        self.fetch(&[("action", "related"), ("uid", uid)]).await
    }

    async fn citation(&self, uid: &str) -> GatewayResult<String> {
        let body: CitationResponse = self.fetch(&[("action", "citation"), ("uid", uid)]).await?;
        Ok(body.citation)
    }
}
