//! Application layer for Sitecraft.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService and the step services)
//! - **Pipeline**: Ordered, conditional step execution
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod pipeline;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    ArchiveRetriever, ArchiveSummary, ScaffoldReport, ScaffoldService, ScriptFetcher,
    StaticFileGenerator, TemplateGenerator,
};

pub use pipeline::{
    Pipeline, PipelineStep, StepContext, StepExecutor, StepName, StepOutcome, StepStatus,
};

// Re-export port traits (for adapter implementation)
pub use ports::{
    ArchiveEntry, ArchiveReader, AssetFetcher, Filesystem, NoProgress, ProgressEvent,
    ProgressReporter,
};

pub use error::ApplicationError;
