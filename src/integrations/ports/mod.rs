//! Gateway trait contracts for external care-data services.

pub mod gateways;

pub use gateways::{
    CareAgentGateway, DrugLabelGateway, GatewayError, GatewayResult, LiteratureGateway,
};
