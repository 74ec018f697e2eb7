//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `sitecraft-adapters` crate provides implementations.

use async_trait::async_trait;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::application::pipeline::StepName;
use crate::domain::NamedColor;
use crate::error::SitecraftResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `sitecraft_adapters::filesystem::LocalFilesystem` (production)
/// - `sitecraft_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> SitecraftResult<()>;

    /// Write content to a file, replacing whatever was there.
    fn write_file(&self, path: &Path, content: &[u8]) -> SitecraftResult<()>;

    /// Write content only if nothing exists at `path` yet.
    ///
    /// Returns `false` (and leaves the existing file untouched) when the
    /// path is already taken.
    fn write_new_file(&self, path: &Path, content: &[u8]) -> SitecraftResult<bool>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for remote assets.
///
/// Implemented by `sitecraft_adapters::http::HttpAssetFetcher`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssetFetcher: Send + Sync {
    /// Fetch the whole response body into memory.
    async fn fetch(&self, url: &str) -> SitecraftResult<Vec<u8>>;

    /// Stream the response body into `destination`.
    ///
    /// Resolves only once every byte is written, flushed and synced.
    /// Returns the number of bytes written.
    async fn download(&self, url: &str, destination: &Path) -> SitecraftResult<u64>;
}

/// One entry of an archive, borrowed for the duration of a visit callback.
pub struct ArchiveEntry<'a> {
    /// Path inside the archive, `/`-separated.
    pub name: &'a str,
    pub is_dir: bool,
    pub contents: &'a mut dyn Read,
}

/// Visitor invoked once per archive entry, in archive order.
pub type EntryVisitor<'v> = dyn FnMut(ArchiveEntry<'_>) -> SitecraftResult<()> + 'v;

/// Port for reading a fetched archive.
///
/// Implemented by `sitecraft_adapters::archive::ZipArchiveReader`.
pub trait ArchiveReader: Send + Sync {
    /// Walk every entry of `archive`.
    ///
    /// Stops at the first error, whether it comes from decoding or from the
    /// visitor.
    fn visit(&self, archive: &[u8], visitor: &mut EntryVisitor<'_>) -> SitecraftResult<()>;
}

/// Things worth telling the user while a scaffold runs.
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressEvent {
    StepStarted(StepName),
    StepSkipped(StepName),
    StepFinished(StepName),
    /// A vendor file was written (path relative to the project root).
    AssetWritten(PathBuf),
    /// A vendor file was already present and kept as is.
    AssetKept(PathBuf),
    ScriptDownloaded { path: PathBuf, bytes: u64 },
    ColorNamed(NamedColor),
}

/// Port for progress notifications.
///
/// The CLI renders these with a spinner; library callers can ignore them.
#[cfg_attr(test, mockall::automock)]
pub trait ProgressReporter: Send + Sync {
    fn report(&self, event: &ProgressEvent);
}

/// Reporter that drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn report(&self, _event: &ProgressEvent) {}
}
