//! Unit tests for the shared filter/sort/group pipeline.

mod filter_tests;
mod fixtures;
