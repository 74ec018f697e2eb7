//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `sitecraft-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `AssetFetcher`: Remote downloads
//!   - `ArchiveReader`: Archive decoding
//!   - `ProgressReporter`: User-facing progress
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - `StepExecutor`, implemented by `ScaffoldService`

pub mod output;

pub use output::{
    ArchiveEntry, ArchiveReader, AssetFetcher, EntryVisitor, Filesystem, NoProgress,
    ProgressEvent, ProgressReporter,
};

#[cfg(test)]
pub use output::{MockAssetFetcher, MockFilesystem, MockProgressReporter};
