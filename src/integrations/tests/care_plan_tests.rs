//! Orchestration tests for care-plan generation over mocked gateways.

use crate::integrations::domain::{
    ArticleSummary, CarePlanForm, GeneratedComponent, LabelSection, LabelSectionKind,
    LiteratureSearch, MedicationReconciliation, ResearchAnalysis,
};
use crate::integrations::ports::{
    CareAgentGateway, DrugLabelGateway, GatewayError, GatewayResult, LiteratureGateway,
};
use crate::integrations::services::{CarePlanError, CarePlanService};
use async_trait::async_trait;
use mockall::mock;
use rstest::rstest;
use serde_json::Value;
use std::sync::Arc;

mock! {
    LabelGw {}

    #[async_trait]
    impl DrugLabelGateway for LabelGw {
        async fn fetch_label(&self, search: &str) -> GatewayResult<Vec<LabelSection>>;
    }
}

mock! {
    LiteratureGw {}

    #[async_trait]
    impl LiteratureGateway for LiteratureGw {
        async fn search(&self, term: &str, max_results: u32) -> GatewayResult<LiteratureSearch>;
        async fn details(&self, uid: &str) -> GatewayResult<ArticleSummary>;
        async fn related(&self, uid: &str) -> GatewayResult<LiteratureSearch>;
        async fn citation(&self, uid: &str) -> GatewayResult<String>;
    }
}

mock! {
    AgentGw {}

    #[async_trait]
    impl CareAgentGateway for AgentGw {
        async fn reconcile_medications(
            &self,
            label_data: &Value,
        ) -> GatewayResult<MedicationReconciliation>;
        async fn analyze_research(&self, literature: &Value) -> GatewayResult<ResearchAnalysis>;
        async fn generate_component(
            &self,
            request: &crate::integrations::domain::GenerateComponentRequest,
        ) -> GatewayResult<GeneratedComponent>;
    }
}

fn form() -> CarePlanForm {
    CarePlanForm {
        patient_name: "Amelia Ortiz".to_owned(),
        medications: vec!["albuterol".to_owned()],
        diagnoses: vec!["asthma".to_owned()],
        care_goals: vec!["reduce rescue-inhaler use".to_owned()],
    }
}

fn sections() -> Vec<LabelSection> {
    vec![LabelSection::new(
        LabelSectionKind::Warnings,
        "May cause drowsiness.",
    )]
}

fn reconciliation() -> MedicationReconciliation {
    MedicationReconciliation {
        reconciliation: "No conflicts found.".to_owned(),
        original_data: Value::Null,
    }
}

fn analysis() -> ResearchAnalysis {
    ResearchAnalysis {
        summary: "Inhaled corticosteroids remain first-line.".to_owned(),
        key_findings: vec!["Adherence drives outcomes.".to_owned()],
        citations: vec!["Smith et al., 2023".to_owned()],
        original_data: Value::Null,
    }
}

fn literature() -> LiteratureSearch {
    LiteratureSearch {
        total: 1,
        articles: vec![ArticleSummary {
            uid: "38000001".to_owned(),
            title: "Asthma management in adolescents".to_owned(),
            authors: vec!["Smith J".to_owned()],
            pub_date: "2023 Nov".to_owned(),
            source: "J Respir Med".to_owned(),
            abstract_text: None,
        }],
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_pipeline_returns_the_generated_component() {
    let mut labels = MockLabelGw::new();
    labels
        .expect_fetch_label()
        .returning(|_| Ok(sections()));
    let mut articles = MockLiteratureGw::new();
    articles
        .expect_search()
        .returning(|_, _| Ok(literature()));
    let mut agent = MockAgentGw::new();
    agent
        .expect_reconcile_medications()
        .returning(|_| Ok(reconciliation()));
    agent
        .expect_analyze_research()
        .returning(|_| Ok(analysis()));
    agent.expect_generate_component().returning(|_| {
        Ok(GeneratedComponent {
            component_code: "export const Plan = () => null;".to_owned(),
        })
    });

    let service = CarePlanService::new(Arc::new(labels), Arc::new(articles), Arc::new(agent));
    let outcome = service
        .generate(form(), "albuterol", "adolescent asthma")
        .await
        .expect("generation succeeds");

    assert!(!outcome.degraded);
    assert_eq!(
        outcome.component.component_code,
        "export const Plan = () => null;"
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn generation_failure_degrades_to_the_fallback_component() {
    let mut labels = MockLabelGw::new();
    labels
        .expect_fetch_label()
        .returning(|_| Ok(sections()));
    let mut articles = MockLiteratureGw::new();
    articles
        .expect_search()
        .returning(|_, _| Ok(literature()));
    let mut agent = MockAgentGw::new();
    agent
        .expect_reconcile_medications()
        .returning(|_| Ok(reconciliation()));
    agent
        .expect_analyze_research()
        .returning(|_| Ok(analysis()));
    agent.expect_generate_component().returning(|_| {
        Err(GatewayError::Status {
            status: 502,
            message: "Bad Gateway".to_owned(),
        })
    });

    let service = CarePlanService::new(Arc::new(labels), Arc::new(articles), Arc::new(agent));
    let outcome = service
        .generate(form(), "albuterol", "adolescent asthma")
        .await
        .expect("fallback keeps the form usable");

    assert!(outcome.degraded);
    assert!(
        outcome
            .component
            .component_code
            .contains("standard template")
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reconciliation_failure_stops_the_pipeline() {
    let mut labels = MockLabelGw::new();
    labels
        .expect_fetch_label()
        .returning(|_| Ok(sections()));
    let mut agent = MockAgentGw::new();
    agent.expect_reconcile_medications().returning(|_| {
        Err(GatewayError::Status {
            status: 500,
            message: "Internal Server Error".to_owned(),
        })
    });

    // No literature or generation expectations: reaching either would
    // panic the mock and fail the test.
    let articles = MockLiteratureGw::new();
    let service = CarePlanService::new(Arc::new(labels), Arc::new(articles), Arc::new(agent));
    let result = service
        .generate(form(), "albuterol", "adolescent asthma")
        .await;

    assert!(matches!(
        result,
        Err(CarePlanError::Gateway(GatewayError::Status {
            status: 500,
            ..
        }))
    ));
}
