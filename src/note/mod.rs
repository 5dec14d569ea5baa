//! Free-text note panel aggregate.
//!
//! The note panel is an independent state machine: content, highlights,
//! screenshot captures, named macros, and an optional attachment to one
//! external entity. It shares nothing with the task directory beyond that
//! untyped attachment reference, and no referential integrity is checked
//! against the task store.

pub mod domain;

#[cfg(test)]
mod tests;
