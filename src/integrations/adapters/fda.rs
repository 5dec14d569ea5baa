//! openFDA drug-label client.

use super::ensure_success;
use crate::integrations::domain::{LabelSection, LabelSectionKind};
use crate::integrations::ports::{DrugLabelGateway, GatewayError, GatewayResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// Connection settings for the openFDA API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenFdaConfig {
    /// API origin.
    pub base_url: String,
    /// API key sent as a query parameter, when issued one.
    pub api_key: Option<String>,
}

impl Default for OpenFdaConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.fda.gov".to_owned(),
            api_key: None,
        }
    }
}

/// Drug-label gateway backed by the openFDA label endpoint.
#[derive(Debug, Clone)]
pub struct OpenFdaClient {
    client: Client,
    config: OpenFdaConfig,
}

/// Raw openFDA label response envelope.
#[derive(Debug, Default, Deserialize)]
struct LabelResponse {
    #[serde(default)]
    results: Vec<LabelRecord>,
}

/// One raw label record; every section arrives as an array of paragraphs.
#[derive(Debug, Default, Deserialize)]
struct LabelRecord {
    #[serde(default)]
    openfda: OpenFdaNames,
    #[serde(default)]
    indications_and_usage: Vec<String>,
    #[serde(default)]
    dosage_and_administration: Vec<String>,
    #[serde(default)]
    warnings: Vec<String>,
    #[serde(default)]
    boxed_warning: Vec<String>,
    #[serde(default)]
    precautions: Vec<String>,
    #[serde(default)]
    contraindications: Vec<String>,
    #[serde(default)]
    adverse_reactions: Vec<String>,
    #[serde(default)]
    drug_interactions: Vec<String>,
    #[serde(default)]
    overdosage: Vec<String>,
    #[serde(default)]
    description: Vec<String>,
    #[serde(default)]
    clinical_pharmacology: Vec<String>,
    #[serde(default)]
    mechanism_of_action: Vec<String>,
    #[serde(default)]
    pharmacokinetics: Vec<String>,
    #[serde(default)]
    storage_and_handling: Vec<String>,
    #[serde(default)]
    information_for_patients: Vec<String>,
    #[serde(default)]
    references: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct OpenFdaNames {
    #[serde(default)]
    brand_name: Vec<String>,
    #[serde(default)]
    generic_name: Vec<String>,
}

impl OpenFdaClient {
    /// Creates a client over the given configuration.
    #[must_use]
    pub fn new(config: OpenFdaConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl DrugLabelGateway for OpenFdaClient {
    async fn fetch_label(&self, search: &str) -> GatewayResult<Vec<LabelSection>> {
        let url = format!("{}/drug/label.json", self.config.base_url);
        let mut query: Vec<(&str, &str)> = vec![("search", search), ("limit", "1")];
        if let Some(api_key) = &self.config.api_key {
            query.push(("api_key", api_key));
        }

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(GatewayError::transport)?;
        ensure_success(&response)?;

        let body: LabelResponse = response
            .json()
            .await
            .map_err(|err| GatewayError::Decode(err.to_string()))?;
        let Some(record) = body.results.into_iter().next() else {
            tracing::debug!(search, "label search matched nothing");
            return Ok(Vec::new());
        };
        Ok(sections_from(&record))
    }
}

/// Distils a raw label record into catalogue-ordered sections.
///
/// Only sections present in the record are emitted; paragraph arrays are
/// joined into one markdown body per section.
fn sections_from(record: &LabelRecord) -> Vec<LabelSection> {
    LabelSectionKind::ALL
        .iter()
        .filter_map(|kind| {
            let paragraphs = paragraphs_for(record, *kind);
            if paragraphs.is_empty() {
                return None;
            }
            Some(LabelSection::new(*kind, paragraphs.join("\n\n")))
        })
        .collect()
}

fn paragraphs_for(record: &LabelRecord, kind: LabelSectionKind) -> &[String] {
    match kind {
        LabelSectionKind::BrandName => &record.openfda.brand_name,
        LabelSectionKind::GenericName => &record.openfda.generic_name,
        LabelSectionKind::Indications => &record.indications_and_usage,
        LabelSectionKind::Dosage => &record.dosage_and_administration,
        LabelSectionKind::Warnings => &record.warnings,
        LabelSectionKind::BoxedWarning => &record.boxed_warning,
        LabelSectionKind::Precautions => &record.precautions,
        LabelSectionKind::Contraindications => &record.contraindications,
        LabelSectionKind::AdverseReactions => &record.adverse_reactions,
        LabelSectionKind::Interactions => &record.drug_interactions,
        LabelSectionKind::Overdosage => &record.overdosage,
        LabelSectionKind::Description => &record.description,
        LabelSectionKind::Pharmacology => &record.clinical_pharmacology,
        LabelSectionKind::Mechanism => &record.mechanism_of_action,
        LabelSectionKind::Pharmacokinetics => &record.pharmacokinetics,
        LabelSectionKind::Storage => &record.storage_and_handling,
        LabelSectionKind::PatientInfo => &record.information_for_patients,
        LabelSectionKind::References => &record.references,
    }
}

#[cfg(test)]
mod tests {
    use super::{LabelRecord, sections_from};
    use crate::integrations::domain::LabelSectionKind;

    #[test]
    fn sections_follow_catalogue_order_and_skip_absent() {
        let record = LabelRecord {
            warnings: vec!["May cause drowsiness.".to_owned()],
            indications_and_usage: vec!["For seasonal allergies.".to_owned()],
            ..LabelRecord::default()
        };

        let sections = sections_from(&record);
        let kinds: Vec<_> = sections.iter().map(|section| section.kind).collect();
        assert_eq!(
            kinds,
            vec![LabelSectionKind::Indications, LabelSectionKind::Warnings]
        );
        assert!(!sections[0].is_warning);
        assert!(sections[1].is_warning);
    }

    #[test]
    fn paragraphs_join_into_one_markdown_body() {
        let record = LabelRecord {
            description: vec!["First paragraph.".to_owned(), "Second paragraph.".to_owned()],
            ..LabelRecord::default()
        };

        let sections = sections_from(&record);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].markdown, "First paragraph.\n\nSecond paragraph.");
    }
}
