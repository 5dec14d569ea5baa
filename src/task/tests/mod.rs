//! Unit tests for the task domain, validation, and services.
