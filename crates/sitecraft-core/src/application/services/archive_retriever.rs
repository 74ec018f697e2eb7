//! Archive Retriever - vendors the framework sources into a project.
//!
//! Workflow:
//! 1. Create the vendor directories
//! 2. Fetch the whole archive
//! 3. Route every entry (`domain::route_entry`) and copy the kept ones,
//!    leaving files that are already on disk untouched

use serde::Serialize;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{ArchiveEntry, ArchiveReader, AssetFetcher, Filesystem, ProgressEvent, ProgressReporter},
    },
    domain::{EntryRoute, layout::VENDOR_DIRECTORIES, route_entry},
    error::SitecraftResult,
};

/// What happened to the entries of one archive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ArchiveSummary {
    /// Files written to the project.
    pub written: usize,
    /// Files already present and left as they were.
    pub skipped_existing: usize,
    /// Directory records, non-asset entries and the excluded entry.
    pub filtered_out: usize,
    /// Asset entries found outside the expected layout, or with unsafe paths.
    pub misplaced: usize,
}

/// Copies the script and stylesheet sources of a framework archive.
pub struct ArchiveRetriever<'a> {
    fetcher: &'a dyn AssetFetcher,
    reader: &'a dyn ArchiveReader,
    filesystem: &'a dyn Filesystem,
    progress: &'a dyn ProgressReporter,
}

impl<'a> ArchiveRetriever<'a> {
    pub fn new(
        fetcher: &'a dyn AssetFetcher,
        reader: &'a dyn ArchiveReader,
        filesystem: &'a dyn Filesystem,
        progress: &'a dyn ProgressReporter,
    ) -> Self {
        Self {
            fetcher,
            reader,
            filesystem,
            progress,
        }
    }

    /// Fetch `url` and copy its assets under `project_root`.
    ///
    /// Safe to run again on the same project: only missing files are
    /// written.
    #[instrument(skip_all, fields(url = %url, root = %project_root.display()))]
    pub async fn retrieve(
        &self,
        url: &str,
        excluded: &str,
        project_root: &Path,
    ) -> SitecraftResult<ArchiveSummary> {
        for dir in VENDOR_DIRECTORIES {
            self.filesystem.create_dir_all(&project_root.join(dir))?;
        }

        let archive = self.fetcher.fetch(url).await?;
        info!(bytes = archive.len(), "Archive fetched");

        let mut summary = ArchiveSummary::default();
        self.reader.visit(&archive, &mut |entry| {
            self.copy_entry(entry, excluded, project_root, &mut summary)
        })?;

        info!(
            written = summary.written,
            skipped = summary.skipped_existing,
            filtered = summary.filtered_out,
            misplaced = summary.misplaced,
            "Archive unpacked"
        );
        Ok(summary)
    }

    fn copy_entry(
        &self,
        entry: ArchiveEntry<'_>,
        excluded: &str,
        project_root: &Path,
        summary: &mut ArchiveSummary,
    ) -> SitecraftResult<()> {
        let destination = match route_entry(entry.name, entry.is_dir, excluded) {
            EntryRoute::Copy(destination) => destination,
            EntryRoute::Excluded | EntryRoute::Filtered => {
                summary.filtered_out += 1;
                return Ok(());
            }
            EntryRoute::Misplaced => {
                warn!(entry = entry.name, "Asset outside the expected layout, not copied");
                summary.misplaced += 1;
                return Ok(());
            }
            EntryRoute::Unsafe => {
                warn!(entry = entry.name, "Entry path leaves the project, not copied");
                summary.misplaced += 1;
                return Ok(());
            }
        };

        let relative = destination.to_path_buf();
        let path = project_root.join(&relative);

        if self.filesystem.exists(&path) {
            debug!(path = %relative.display(), "Already present, keeping");
            summary.skipped_existing += 1;
            self.progress.report(&ProgressEvent::AssetKept(relative));
            return Ok(());
        }

        let mut content = Vec::new();
        entry
            .contents
            .read_to_end(&mut content)
            .map_err(|e| ApplicationError::ArchiveParseFailure {
                reason: format!("{}: {}", entry.name, e),
            })?;

        if let Some(parent) = path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }

        if self.filesystem.write_new_file(&path, &content)? {
            debug!(path = %relative.display(), bytes = content.len(), "Asset written");
            summary.written += 1;
            self.progress.report(&ProgressEvent::AssetWritten(relative));
        } else {
            summary.skipped_existing += 1;
            self.progress.report(&ProgressEvent::AssetKept(relative));
        }

        Ok(())
    }
}
