//! Infrastructure adapters for Sitecraft.
//!
//! This crate implements the ports defined in `sitecraft-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod archive;
pub mod filesystem;
pub mod http;

// Re-export commonly used adapters
pub use archive::ZipArchiveReader;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use http::HttpAssetFetcher;
