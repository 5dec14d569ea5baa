//! Domain types for external care-data responses.

mod care_plan;
mod label;
mod literature;

pub use care_plan::{
    CarePlanForm, CarePlanOutcome, GenerateComponentRequest, GeneratedComponent,
    MedicationReconciliation, ResearchAnalysis,
};
pub use label::{LabelSection, LabelSectionKind};
pub use literature::{ArticleSummary, LiteratureSearch};
