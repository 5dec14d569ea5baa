//! Care-task records and their directory services.
//!
//! A task is one unit of patient-care work: a ticket with a status,
//! priority, issue type, due date, and the stakeholders involved in the
//! patient's care. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Raw-record schema validation in [`validation`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
