//! Application services for the task directory.

mod directory;

pub use directory::{
    CreateTaskRequest, IngestReport, StakeholderInput, TaskDirectoryError, TaskDirectoryResult,
    TaskDirectoryService,
};
