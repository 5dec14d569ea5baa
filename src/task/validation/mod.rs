//! Schema validation for raw patient-task records.
//!
//! The bundled patient dataset is loosely typed. Instead of probing field
//! presence and silently filtering bad rows, ingestion deserializes into
//! [`RawTaskRecord`] and runs explicit validation that yields a typed
//! [`Task`](crate::task::domain::Task) or a [`RecordValidationError`]
//! naming the defect. Callers decide what to do with the rejects.

mod record;
mod rules;

pub use record::{RawStakeholder, RawTaskRecord};
pub use rules::{RecordValidationError, validate_record, validate_records};
