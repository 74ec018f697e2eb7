//! Implementation of the `sitecraft new` command.
//!
//! Responsibility: turn flags, prompt answers and presets into
//! [`ScaffoldOptions`], run the core scaffold service, and display results.
//! No scaffolding logic lives here.

use std::io::IsTerminal as _;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use tracing::{debug, info, instrument};

use sitecraft_adapters::{HttpAssetFetcher, LocalFilesystem, ZipArchiveReader};
use sitecraft_core::{
    application::{ArchiveSummary, ScaffoldReport, ScaffoldService},
    domain::{DomainError, ProjectName, ScaffoldOptions},
};

use crate::{
    cli::{NewArgs, OutputFormat, global::GlobalArgs},
    config::{AppConfig, Presets},
    error::{CliResult, IntoCli},
    output::OutputManager,
    progress::SpinnerReporter,
};

/// Values collected interactively for options not given as flags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Answers {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub lang: Option<String>,
    pub direction: Option<String>,
    pub opengraph: Option<bool>,
    pub colors: Option<Vec<String>>,
    pub sections: Option<Vec<String>>,
    pub jquery: Option<bool>,
    pub htaccess: Option<bool>,
    pub robots: Option<bool>,
    pub sitemap: Option<bool>,
}

/// Execute the `sitecraft new` command.
///
/// Dispatch sequence:
/// 1. Validate the name and refuse an existing `./NAME` before any prompt
/// 2. Prompt for unset values unless `--yes`, `--quiet` or no TTY
/// 3. Resolve options: flags > answers > presets
/// 4. Run the pipeline on a current-thread runtime
/// 5. Print the report (human summary or JSON)
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Preflight
    let name = ProjectName::new(args.name.as_str())?;
    let output_root = PathBuf::from(".");
    let project_root = output_root.join(name.as_str());

    let reporter = SpinnerReporter::new(&output);
    let service = ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(HttpAssetFetcher::new()?),
        Box::new(ZipArchiveReader::new()),
    )
    .with_progress(Box::new(reporter.clone()))
    .with_sources(config.assets.sources());

    service.ensure_target_free(&project_root)?;

    // 2. Prompts
    let interactive = !args.yes && !global.quiet && std::io::stdin().is_terminal();
    let answers = if interactive {
        ask(&args, &config.presets)?
    } else {
        Answers::default()
    };

    // 3. Resolution
    let options = resolve_options(&args, &answers, &config.presets, Local::now().date_naive())?;
    debug!(?options, "Options resolved");

    // 4. Scaffold
    let json = output.format() == OutputFormat::Json;
    if !json {
        output.header(&format!("Creating '{}'...", name))?;
    }
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .with_cli_context(|| "Failed to start the async runtime")?;

    let result = runtime.block_on(service.scaffold(options, &output_root));
    reporter.finish();
    let report = result?;

    info!(run_id = %report.run_id, "Scaffold finished");

    // 5. Report
    if json {
        output.json(&report)?;
        return Ok(());
    }
    print_summary(&report, &project_root, &output)
}

#[cfg(feature = "interactive")]
fn ask(args: &NewArgs, presets: &Presets) -> CliResult<Answers> {
    super::prompt::ask(args, presets)
}

#[cfg(not(feature = "interactive"))]
fn ask(_args: &NewArgs, _presets: &Presets) -> CliResult<Answers> {
    debug!("Built without prompts; using presets");
    Ok(Answers::default())
}

/// Merge the three sources of option values, highest priority first.
pub fn resolve_options(
    args: &NewArgs,
    answers: &Answers,
    presets: &Presets,
    today: NaiveDate,
) -> Result<ScaffoldOptions, DomainError> {
    fn text(flag: &Option<String>, answer: &Option<String>, preset: &str) -> String {
        flag.clone()
            .or_else(|| answer.clone())
            .unwrap_or_else(|| preset.to_owned())
    }
    fn list(flag: &Option<Vec<String>>, answer: &Option<Vec<String>>, preset: &[String]) -> Vec<String> {
        flag.clone()
            .or_else(|| answer.clone())
            .unwrap_or_else(|| preset.to_vec())
    }
    fn switch(flag: Option<bool>, answer: Option<bool>, preset: bool) -> bool {
        flag.or(answer).unwrap_or(preset)
    }

    let direction = args.direction.map(|d| d.as_str().to_owned());

    ScaffoldOptions::builder()
        .name(args.name.as_str())
        .title(text(&args.title, &answers.title, &presets.title))
        .description(text(&args.description, &answers.description, &presets.description))
        .url(text(&args.url, &answers.url, &presets.url))
        .lang(text(&args.lang, &answers.lang, &presets.lang))
        .direction(text(&direction, &answers.direction, &presets.direction))
        .opengraph(switch(args.opengraph_flag(), answers.opengraph, presets.opengraph))
        .colors(list(&args.colors, &answers.colors, &presets.colors))
        .sections(list(&args.sections, &answers.sections, &presets.sections))
        .script_library(switch(args.jquery_flag(), answers.jquery, presets.jquery))
        .htaccess(switch(args.htaccess_flag(), answers.htaccess, presets.htaccess))
        .robots(switch(args.robots_flag(), answers.robots, presets.robots))
        .sitemap(switch(args.sitemap_flag(), answers.sitemap, presets.sitemap))
        .last_modified(today)
        .build()
}

fn print_summary(report: &ScaffoldReport, project_root: &Path, output: &OutputManager) -> CliResult<()> {
    output.success(&format!("Website created at {}", project_root.display()))?;

    if let Some(archive) = report.archive {
        output.info(&archive_line(&archive))?;
        if archive.misplaced > 0 {
            output.warning(&format!(
                "{} archive entries were outside the expected layout and were not copied",
                archive.misplaced
            ))?;
        }
    }

    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!("  cd {}", project_root.display()))?;
    output.print("  sass sass/main.scss css/main.css")?;
    output.print("  # open index.html in a browser")?;
    Ok(())
}

fn archive_line(summary: &ArchiveSummary) -> String {
    let mut line = format!("Materialize: {} files written", summary.written);
    if summary.skipped_existing > 0 {
        line.push_str(&format!(", {} already present", summary.skipped_existing));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::TextDirection;

    fn args(name: &str) -> NewArgs {
        NewArgs {
            name: name.into(),
            ..NewArgs::default()
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn presets_fill_everything_unset() {
        let options =
            resolve_options(&args("demo"), &Answers::default(), &Presets::default(), today()).unwrap();

        assert_eq!(options.name().as_str(), "demo");
        assert_eq!(options.title(), "New Materialize website");
        assert_eq!(options.lang().as_str(), "en");
        assert!(options.colors().is_empty());
        assert_eq!(options.sections().len(), 3);
        assert!(options.script_library());
        assert!(options.sitemap());
        assert_eq!(options.last_modified(), Some(today()));
    }

    #[test]
    fn answers_beat_presets() {
        let answers = Answers {
            title: Some("Answered".into()),
            jquery: Some(false),
            colors: Some(vec!["#00ff00".into()]),
            ..Answers::default()
        };

        let options = resolve_options(&args("demo"), &answers, &Presets::default(), today()).unwrap();

        assert_eq!(options.title(), "Answered");
        assert!(!options.script_library());
        assert_eq!(options.colors().len(), 1);
    }

    #[test]
    fn flags_beat_answers() {
        let mut flags = args("demo");
        flags.title = Some("Flagged".into());
        flags.jquery = true;
        flags.direction = Some(TextDirection::Rtl);
        flags.sections = Some(vec!["intro".into()]);
        let answers = Answers {
            title: Some("Answered".into()),
            jquery: Some(false),
            direction: Some("ltr".into()),
            sections: Some(vec!["a".into(), "b".into()]),
            ..Answers::default()
        };

        let options = resolve_options(&flags, &answers, &Presets::default(), today()).unwrap();

        assert_eq!(options.title(), "Flagged");
        assert!(options.script_library());
        assert_eq!(options.direction().to_string(), "rtl");
        assert_eq!(options.sections().len(), 1);
    }

    #[test]
    fn negated_flag_beats_true_preset() {
        let mut flags = args("demo");
        flags.no_sitemap = true;
        flags.no_htaccess = true;

        let options =
            resolve_options(&flags, &Answers::default(), &Presets::default(), today()).unwrap();

        assert!(!options.sitemap());
        assert!(!options.htaccess());
        assert!(options.robots());
    }

    #[test]
    fn empty_list_flag_clears_preset() {
        let mut flags = args("demo");
        flags.sections = Some(Vec::new());

        let options =
            resolve_options(&flags, &Answers::default(), &Presets::default(), today()).unwrap();

        assert!(options.sections().is_empty());
    }

    #[test]
    fn invalid_colour_is_a_domain_error() {
        let mut flags = args("demo");
        flags.colors = Some(vec!["#zzz".into()]);

        let err = resolve_options(&flags, &Answers::default(), &Presets::default(), today())
            .unwrap_err();

        assert!(matches!(err, DomainError::InvalidColor { .. }));
    }

    #[test]
    fn archive_line_mentions_kept_files_only_when_present() {
        let fresh = ArchiveSummary {
            written: 12,
            ..ArchiveSummary::default()
        };
        assert_eq!(archive_line(&fresh), "Materialize: 12 files written");

        let partial = ArchiveSummary {
            written: 2,
            skipped_existing: 3,
            ..ArchiveSummary::default()
        };
        assert_eq!(archive_line(&partial), "Materialize: 2 files written, 3 already present");
    }
}
