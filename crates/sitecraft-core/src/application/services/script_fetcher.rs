use std::path::Path;
use tracing::{info, instrument};

use crate::{
    application::ports::{AssetFetcher, ProgressEvent, ProgressReporter},
    error::SitecraftResult,
};

/// Downloads a single script into the project.
pub struct ScriptFetcher<'a> {
    fetcher: &'a dyn AssetFetcher,
    progress: &'a dyn ProgressReporter,
}

impl<'a> ScriptFetcher<'a> {
    pub fn new(fetcher: &'a dyn AssetFetcher, progress: &'a dyn ProgressReporter) -> Self {
        Self { fetcher, progress }
    }

    /// Stream `url` into `project_root/relative`.
    ///
    /// Completes only after the file is on disk.
    #[instrument(skip_all, fields(url = %url, path = %relative.display()))]
    pub async fn fetch(
        &self,
        url: &str,
        project_root: &Path,
        relative: &Path,
    ) -> SitecraftResult<u64> {
        let bytes = self
            .fetcher
            .download(url, &project_root.join(relative))
            .await?;

        info!(bytes, "Script downloaded");
        self.progress.report(&ProgressEvent::ScriptDownloaded {
            path: relative.to_path_buf(),
            bytes,
        });
        Ok(bytes)
    }
}
