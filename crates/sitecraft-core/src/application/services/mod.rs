//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "scaffold a website" or "vendor the framework".

pub mod archive_retriever;
pub mod generators;
pub mod scaffold_service;
pub mod script_fetcher;

pub use archive_retriever::{ArchiveRetriever, ArchiveSummary};
pub use generators::{StaticFileGenerator, TemplateGenerator};
pub use scaffold_service::{ScaffoldReport, ScaffoldService};
pub use script_fetcher::ScriptFetcher;
