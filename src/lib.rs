//! Carelane: healthcare care-task coordination core.
//!
//! This crate provides the coordination core for a patient care-task board:
//! task records and their lifecycle, the parent/child and linked-task
//! relationship store, the shared filter/sort/group pipeline behind the
//! board, list, and calendar views, the note panel aggregate, the
//! template-based assistant reply simulation, and gateways to external
//! care-data services (drug labels, literature search, care-plan agent).
//!
//! # Architecture
//!
//! Carelane follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (HTTP services, memory)
//!
//! # Modules
//!
//! - [`task`]: Care-task records, validation, and directory services
//! - [`hierarchy`]: Parent/child and linked-task relationship store
//! - [`pipeline`]: Filter, sort, and group stages shared by every view
//! - [`note`]: Free-text note panel aggregate
//! - [`assist`]: Template-expanded assistant replies with typing simulation
//! - [`integrations`]: Drug-label, literature, and care-agent gateways

pub mod assist;
pub mod hierarchy;
pub mod integrations;
pub mod note;
pub mod pipeline;
pub mod task;
