//! Ordered, conditional execution of scaffold steps.
//!
//! A [`Pipeline`] is a fixed list of [`PipelineStep`]s. Each step has a name
//! and a predicate over the options; the work itself is done by a
//! [`StepExecutor`], which dispatches on the name. Steps run one after the
//! other, each awaited to completion before the next starts. The first
//! failure stops the run and nothing already written is undone.

use async_trait::async_trait;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::application::ports::{ProgressEvent, ProgressReporter};
use crate::application::services::ArchiveSummary;
use crate::domain::{NamedColor, ScaffoldOptions};
use crate::error::SitecraftResult;

/// Identity of each scaffold step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepName {
    CreateDirectories,
    CreatePlaceholders,
    RetrieveFramework,
    RetrieveScriptLibrary,
    ClassifyColors,
    GenerateStylesheet,
    GenerateHtml,
    GenerateHtaccess,
    GenerateSitemap,
    GenerateRobots,
}

impl StepName {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CreateDirectories => "create-directories",
            Self::CreatePlaceholders => "create-placeholders",
            Self::RetrieveFramework => "retrieve-framework",
            Self::RetrieveScriptLibrary => "retrieve-script-library",
            Self::ClassifyColors => "classify-colors",
            Self::GenerateStylesheet => "generate-stylesheet",
            Self::GenerateHtml => "generate-html",
            Self::GenerateHtaccess => "generate-htaccess",
            Self::GenerateSitemap => "generate-sitemap",
            Self::GenerateRobots => "generate-robots",
        }
    }

    /// Short human description used by progress output.
    pub const fn description(&self) -> &'static str {
        match self {
            Self::CreateDirectories => "Creating project directories",
            Self::CreatePlaceholders => "Creating placeholder files",
            Self::RetrieveFramework => "Downloading Materialize sources",
            Self::RetrieveScriptLibrary => "Downloading jQuery",
            Self::ClassifyColors => "Naming colours",
            Self::GenerateStylesheet => "Writing stylesheet",
            Self::GenerateHtml => "Writing index.html",
            Self::GenerateHtaccess => "Writing .htaccess",
            Self::GenerateSitemap => "Writing sitemap.xml",
            Self::GenerateRobots => "Writing robots.txt",
        }
    }
}

impl fmt::Display for StepName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Predicate deciding whether a step runs for the given options.
pub type StepPredicate = fn(&ScaffoldOptions) -> bool;

fn always(_: &ScaffoldOptions) -> bool {
    true
}

/// A named step plus the condition under which it runs.
#[derive(Debug, Clone, Copy)]
pub struct PipelineStep {
    name: StepName,
    enabled: StepPredicate,
}

impl PipelineStep {
    /// A step that always runs.
    pub const fn new(name: StepName) -> Self {
        Self {
            name,
            enabled: always,
        }
    }

    /// Run only when `predicate` holds.
    pub const fn when(mut self, predicate: StepPredicate) -> Self {
        self.enabled = predicate;
        self
    }

    pub const fn name(&self) -> StepName {
        self.name
    }

    pub fn is_enabled(&self, options: &ScaffoldOptions) -> bool {
        (self.enabled)(options)
    }
}

/// Whether a step ran or was skipped by its predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Completed,
    Skipped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepOutcome {
    pub step: StepName,
    pub status: StepStatus,
}

/// State shared between steps of one run.
///
/// Holds the options plus values produced upstream and consumed downstream
/// (the classified colours feed the stylesheet and HTML steps).
#[derive(Debug)]
pub struct StepContext<'a> {
    pub options: &'a ScaffoldOptions,
    pub project_root: PathBuf,
    pub colors: Vec<NamedColor>,
    pub archive: Option<ArchiveSummary>,
}

impl<'a> StepContext<'a> {
    pub fn new(options: &'a ScaffoldOptions, project_root: impl Into<PathBuf>) -> Self {
        Self {
            options,
            project_root: project_root.into(),
            colors: Vec::new(),
            archive: None,
        }
    }
}

/// Performs the work behind a step name.
#[async_trait]
pub trait StepExecutor: Send + Sync {
    async fn execute(&self, step: StepName, context: &mut StepContext<'_>) -> SitecraftResult<()>;
}

/// Ordered list of steps.
#[derive(Debug, Clone)]
pub struct Pipeline {
    steps: Vec<PipelineStep>,
}

impl Pipeline {
    pub fn new(steps: Vec<PipelineStep>) -> Self {
        Self { steps }
    }

    /// The scaffold in its fixed order.
    pub fn standard() -> Self {
        Self::new(vec![
            PipelineStep::new(StepName::CreateDirectories),
            PipelineStep::new(StepName::CreatePlaceholders),
            PipelineStep::new(StepName::RetrieveFramework),
            PipelineStep::new(StepName::RetrieveScriptLibrary).when(|o| o.script_library()),
            PipelineStep::new(StepName::ClassifyColors).when(|o| !o.colors().is_empty()),
            PipelineStep::new(StepName::GenerateStylesheet),
            PipelineStep::new(StepName::GenerateHtml),
            PipelineStep::new(StepName::GenerateHtaccess).when(|o| o.htaccess()),
            PipelineStep::new(StepName::GenerateSitemap).when(|o| o.sitemap()),
            PipelineStep::new(StepName::GenerateRobots).when(|o| o.robots()),
        ])
    }

    pub fn steps(&self) -> &[PipelineStep] {
        &self.steps
    }

    /// Run every enabled step in order.
    ///
    /// Disabled steps are reported as skipped without touching the executor.
    /// The first failing step ends the run; its error comes back wrapped with
    /// the step name.
    pub async fn run<E>(
        &self,
        context: &mut StepContext<'_>,
        executor: &E,
        progress: &dyn ProgressReporter,
    ) -> SitecraftResult<Vec<StepOutcome>>
    where
        E: StepExecutor + ?Sized,
    {
        let mut outcomes = Vec::with_capacity(self.steps.len());

        for step in &self.steps {
            let name = step.name();

            if !step.is_enabled(context.options) {
                debug!(step = %name, "Step disabled, skipping");
                progress.report(&ProgressEvent::StepSkipped(name));
                outcomes.push(StepOutcome {
                    step: name,
                    status: StepStatus::Skipped,
                });
                continue;
            }

            info!(step = %name, "Step started");
            progress.report(&ProgressEvent::StepStarted(name));

            executor
                .execute(name, context)
                .await
                .map_err(|e| e.in_step(name))?;

            info!(step = %name, "Step finished");
            progress.report(&ProgressEvent::StepFinished(name));
            outcomes.push(StepOutcome {
                step: name,
                status: StepStatus::Completed,
            });
        }

        Ok(outcomes)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use crate::application::ports::{MockProgressReporter, NoProgress};
    use crate::error::{ErrorKind, SitecraftError};
    use mockall::Sequence;
    use std::sync::Mutex;
    use tokio_test::block_on;

    /// Records every step it is asked to run; optionally fails one of them.
    #[derive(Default)]
    struct RecordingExecutor {
        ran: Mutex<Vec<StepName>>,
        fail_on: Option<StepName>,
    }

    impl RecordingExecutor {
        fn failing_on(step: StepName) -> Self {
            Self {
                fail_on: Some(step),
                ..Self::default()
            }
        }

        fn ran(&self) -> Vec<StepName> {
            self.ran.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl StepExecutor for RecordingExecutor {
        async fn execute(&self, step: StepName, _: &mut StepContext<'_>) -> SitecraftResult<()> {
            self.ran.lock().unwrap().push(step);
            if self.fail_on == Some(step) {
                return Err(SitecraftError::from(ApplicationError::NetworkFailure {
                    url: "https://example.com/a.zip".into(),
                    reason: "HTTP 404".into(),
                }));
            }
            Ok(())
        }
    }

    fn options(jquery: bool, colors: &[&str]) -> ScaffoldOptions {
        ScaffoldOptions::builder()
            .name("demo")
            .script_library(jquery)
            .colors(colors.iter().copied())
            .htaccess(true)
            .sitemap(false)
            .robots(true)
            .build()
            .unwrap()
    }

    #[test]
    fn standard_order_is_fixed() {
        let names: Vec<_> = Pipeline::standard().steps().iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            vec![
                StepName::CreateDirectories,
                StepName::CreatePlaceholders,
                StepName::RetrieveFramework,
                StepName::RetrieveScriptLibrary,
                StepName::ClassifyColors,
                StepName::GenerateStylesheet,
                StepName::GenerateHtml,
                StepName::GenerateHtaccess,
                StepName::GenerateSitemap,
                StepName::GenerateRobots,
            ]
        );
    }

    #[test]
    fn predicates_follow_options() {
        let pipeline = Pipeline::standard();
        let opts = options(false, &[]);
        let enabled: Vec<_> = pipeline
            .steps()
            .iter()
            .filter(|s| s.is_enabled(&opts))
            .map(|s| s.name())
            .collect();

        assert!(!enabled.contains(&StepName::RetrieveScriptLibrary));
        assert!(!enabled.contains(&StepName::ClassifyColors));
        assert!(!enabled.contains(&StepName::GenerateSitemap));
        assert!(enabled.contains(&StepName::GenerateHtaccess));
        assert!(enabled.contains(&StepName::GenerateRobots));
    }

    #[test]
    fn runs_enabled_steps_in_order_and_skips_the_rest() {
        let opts = options(true, &["#ff0000"]);
        let pipeline = Pipeline::standard();
        let executor = RecordingExecutor::default();

        let mut ctx = StepContext::new(&opts, "demo");
        let outcomes = block_on(pipeline.run(&mut ctx, &executor, &NoProgress)).unwrap();

        let expected: Vec<_> = pipeline
            .steps()
            .iter()
            .map(|s| s.name())
            .filter(|n| *n != StepName::GenerateSitemap)
            .collect();
        assert_eq!(executor.ran(), expected);

        assert_eq!(outcomes.len(), 10);
        let skipped: Vec<_> = outcomes
            .iter()
            .filter(|o| o.status == StepStatus::Skipped)
            .map(|o| o.step)
            .collect();
        assert_eq!(skipped, vec![StepName::GenerateSitemap]);
    }

    #[test]
    fn first_failure_aborts_remaining_steps() {
        let opts = options(false, &[]);
        let pipeline = Pipeline::standard();
        let executor = RecordingExecutor::failing_on(StepName::RetrieveFramework);

        let mut ctx = StepContext::new(&opts, "demo");
        let err = block_on(pipeline.run(&mut ctx, &executor, &NoProgress)).unwrap_err();

        assert_eq!(err.step(), Some(StepName::RetrieveFramework));
        assert_eq!(err.kind(), ErrorKind::NetworkFailure);
        assert_eq!(
            executor.ran(),
            vec![
                StepName::CreateDirectories,
                StepName::CreatePlaceholders,
                StepName::RetrieveFramework,
            ]
        );
    }

    #[test]
    fn progress_sees_start_finish_and_skip() {
        let opts = options(false, &[]);
        let pipeline = Pipeline::new(vec![
            PipelineStep::new(StepName::CreateDirectories),
            PipelineStep::new(StepName::GenerateSitemap).when(|o| o.sitemap()),
        ]);
        let executor = RecordingExecutor::default();

        let mut progress = MockProgressReporter::new();
        let mut seq = Sequence::new();
        for event in [
            ProgressEvent::StepStarted(StepName::CreateDirectories),
            ProgressEvent::StepFinished(StepName::CreateDirectories),
            ProgressEvent::StepSkipped(StepName::GenerateSitemap),
        ] {
            progress
                .expect_report()
                .withf(move |e| *e == event)
                .times(1)
                .in_sequence(&mut seq)
                .return_const(());
        }

        let mut ctx = StepContext::new(&opts, "demo");
        block_on(pipeline.run(&mut ctx, &executor, &progress)).unwrap();
    }

    #[test]
    fn step_names_are_kebab_case() {
        assert_eq!(StepName::RetrieveScriptLibrary.to_string(), "retrieve-script-library");
        assert_eq!(
            serde_json::to_string(&StepName::GenerateHtml).unwrap(),
            "\"generate-html\""
        );
    }
}
