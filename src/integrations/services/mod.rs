//! Orchestration services over the external gateways.

mod care_plan;

pub use care_plan::{CarePlanError, CarePlanService};
