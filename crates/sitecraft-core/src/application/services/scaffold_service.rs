//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Check that the project directory is free
//! 2. Run the standard pipeline (directories, vendored assets, generated files)
//! 3. Return a report of what ran
//!
//! It implements the driving port (`StepExecutor`) and uses driven ports
//! (outgoing) for every side effect.

use async_trait::async_trait;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    application::{
        ApplicationError,
        pipeline::{Pipeline, StepContext, StepExecutor, StepName, StepOutcome},
        ports::{
            ArchiveReader, AssetFetcher, Filesystem, NoProgress, ProgressEvent, ProgressReporter,
        },
        services::{
            ArchiveRetriever, ArchiveSummary, ScriptFetcher, StaticFileGenerator,
            TemplateGenerator,
        },
    },
    domain::{
        AssetSources, ColorClassifier, NamedColor, ScaffoldOptions,
        layout::{PLACEHOLDER_FILES, PROJECT_DIRECTORIES},
    },
    error::SitecraftResult,
};

/// Result of a successful scaffold.
#[derive(Debug, Clone, Serialize)]
pub struct ScaffoldReport {
    pub run_id: Uuid,
    pub project_root: PathBuf,
    pub colors: Vec<NamedColor>,
    pub steps: Vec<StepOutcome>,
    pub archive: Option<ArchiveSummary>,
}

impl ScaffoldReport {
    pub fn completed(&self) -> impl Iterator<Item = StepName> + '_ {
        self.steps
            .iter()
            .filter(|o| o.status == crate::application::pipeline::StepStatus::Completed)
            .map(|o| o.step)
    }
}

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    fetcher: Box<dyn AssetFetcher>,
    archive_reader: Box<dyn ArchiveReader>,
    progress: Box<dyn ProgressReporter>,
    sources: AssetSources,
    pipeline: Pipeline,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use sitecraft_core::application::ScaffoldService;
    ///
    /// let service = ScaffoldService::new(
    ///     filesystem,     // impl Filesystem
    ///     fetcher,        // impl AssetFetcher
    ///     archive_reader, // impl ArchiveReader
    /// );
    /// ```
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        fetcher: Box<dyn AssetFetcher>,
        archive_reader: Box<dyn ArchiveReader>,
    ) -> Self {
        Self {
            filesystem,
            fetcher,
            archive_reader,
            progress: Box::new(NoProgress),
            sources: AssetSources::default(),
            pipeline: Pipeline::standard(),
        }
    }

    pub fn with_progress(mut self, progress: Box<dyn ProgressReporter>) -> Self {
        self.progress = progress;
        self
    }

    /// Override where the framework archive and script library come from.
    pub fn with_sources(mut self, sources: AssetSources) -> Self {
        self.sources = sources;
        self
    }

    pub fn sources(&self) -> &AssetSources {
        &self.sources
    }

    /// Scaffold a new website under `output_root/<name>`.
    ///
    /// Fails with `TargetExists`, before writing anything, when that
    /// directory is already there.
    #[instrument(
        skip_all,
        fields(
            project = %options.name(),
            output_root = %output_root.as_ref().display()
        )
    )]
    pub async fn scaffold(
        &self,
        options: ScaffoldOptions,
        output_root: impl AsRef<Path>,
    ) -> SitecraftResult<ScaffoldReport> {
        let project_root = output_root.as_ref().join(options.name().as_str());
        self.ensure_target_free(&project_root)?;

        let run_id = Uuid::new_v4();
        info!(%run_id, root = %project_root.display(), "Scaffolding website");

        let mut context = StepContext::new(&options, &project_root);
        let steps = self
            .pipeline
            .run(&mut context, self, self.progress.as_ref())
            .await?;

        info!("Scaffold completed successfully");
        Ok(ScaffoldReport {
            run_id,
            project_root,
            colors: context.colors,
            steps,
            archive: context.archive,
        })
    }

    /// Precondition shared by the CLI's early check and `scaffold`.
    pub fn ensure_target_free(&self, project_root: &Path) -> SitecraftResult<()> {
        if self.filesystem.exists(project_root) {
            return Err(ApplicationError::TargetExists {
                path: project_root.to_path_buf(),
            }
            .into());
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Steps
    // -------------------------------------------------------------------------

    fn create_directories(&self, root: &Path) -> SitecraftResult<()> {
        self.filesystem.create_dir_all(root)?;
        for dir in PROJECT_DIRECTORIES {
            self.filesystem.create_dir_all(&root.join(dir))?;
        }
        Ok(())
    }

    fn create_placeholders(&self, root: &Path) -> SitecraftResult<()> {
        for file in PLACEHOLDER_FILES {
            self.filesystem.write_file(&root.join(file), b"")?;
        }
        Ok(())
    }

    fn classify_colors(&self, context: &mut StepContext<'_>) {
        context.colors = ColorClassifier::classify(context.options.colors());
        for color in &context.colors {
            info!(name = %color.name, hex = %color.hex(), "Color named");
            self.progress.report(&ProgressEvent::ColorNamed(color.clone()));
        }
    }
}

#[async_trait]
impl StepExecutor for ScaffoldService {
    async fn execute(&self, step: StepName, context: &mut StepContext<'_>) -> SitecraftResult<()> {
        let root = context.project_root.clone();
        let options = context.options;

        match step {
            StepName::CreateDirectories => self.create_directories(&root),
            StepName::CreatePlaceholders => self.create_placeholders(&root),
            StepName::RetrieveFramework => {
                let retriever = ArchiveRetriever::new(
                    self.fetcher.as_ref(),
                    self.archive_reader.as_ref(),
                    self.filesystem.as_ref(),
                    self.progress.as_ref(),
                );
                let summary = retriever
                    .retrieve(
                        &self.sources.framework_archive_url,
                        &self.sources.excluded_entry,
                        &root,
                    )
                    .await?;
                context.archive = Some(summary);
                Ok(())
            }
            StepName::RetrieveScriptLibrary => {
                ScriptFetcher::new(self.fetcher.as_ref(), self.progress.as_ref())
                    .fetch(
                        &self.sources.script_library_url,
                        &root,
                        &self.sources.script_library_path(),
                    )
                    .await?;
                Ok(())
            }
            StepName::ClassifyColors => {
                self.classify_colors(context);
                Ok(())
            }
            StepName::GenerateStylesheet => TemplateGenerator::new(self.filesystem.as_ref())
                .write_stylesheet(&root, options, &context.colors)
                .map(drop),
            StepName::GenerateHtml => TemplateGenerator::new(self.filesystem.as_ref())
                .write_html(&root, options, &context.colors)
                .map(drop),
            StepName::GenerateHtaccess => StaticFileGenerator::new(self.filesystem.as_ref())
                .write_htaccess(&root)
                .map(drop),
            StepName::GenerateSitemap => StaticFileGenerator::new(self.filesystem.as_ref())
                .write_sitemap(&root, options)
                .map(drop),
            StepName::GenerateRobots => StaticFileGenerator::new(self.filesystem.as_ref())
                .write_robots(&root, options)
                .map(drop),
        }
    }
}
