//! Gateways to external care-data services.
//!
//! Three services sit behind the care-plan forms: the openFDA drug-label
//! API, a PubMed proxy exposed by the product backend, and the care-agent
//! service that turns label and literature data into a generated care-plan
//! component. Each call is a single fetch, with no retry or backoff, and any
//! non-2xx response surfaces as a typed error carried to the issuing form.
//!
//! - Response-shaped domain types in [`domain`]
//! - Gateway trait contracts in [`ports`]
//! - HTTP client implementations in [`adapters`]
//! - Care-plan orchestration in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
