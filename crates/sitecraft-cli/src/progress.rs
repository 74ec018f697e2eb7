//! Terminal rendering of pipeline progress.
//!
//! A spinner shows the running step; vendor files and colours are printed
//! above it as they happen.

use std::path::Path;
use std::time::Duration;

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use sitecraft_core::prelude::{NamedColor, ProgressEvent, ProgressReporter};

use crate::cli::OutputFormat;
use crate::output::OutputManager;

/// [`ProgressReporter`] backed by an indicatif spinner.
///
/// Clones share the same spinner, so the command keeps one to clear it once
/// the service returns.
#[derive(Clone)]
pub struct SpinnerReporter {
    bar: ProgressBar,
    term: Term,
    colored: bool,
    silent: bool,
}

impl SpinnerReporter {
    pub fn new(output: &OutputManager) -> Self {
        let silent = output.is_quiet() || output.format() == OutputFormat::Json;
        let bar = if silent || output.format() != OutputFormat::Human {
            ProgressBar::hidden()
        } else {
            let bar = ProgressBar::new_spinner();
            let style = ProgressStyle::with_template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner());
            bar.set_style(style);
            bar.enable_steady_tick(Duration::from_millis(100));
            bar
        };

        Self {
            bar,
            term: Term::stdout(),
            colored: output.supports_color(),
            silent,
        }
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    fn line(&self, text: String) {
        if self.silent {
            return;
        }
        if self.bar.is_hidden() {
            let _ = self.term.write_line(&text);
        } else {
            self.bar.println(text);
        }
    }
}

impl ProgressReporter for SpinnerReporter {
    fn report(&self, event: &ProgressEvent) {
        match event {
            ProgressEvent::StepStarted(step) => self.bar.set_message(step.description()),
            ProgressEvent::StepSkipped(_) | ProgressEvent::StepFinished(_) => {}
            ProgressEvent::AssetWritten(path) => self.line(asset_line(path, self.colored)),
            ProgressEvent::AssetKept(path) => {
                self.line(format!("kept {}", path.display()));
            }
            ProgressEvent::ScriptDownloaded { path, bytes } => {
                self.line(format!("Downloaded {} ({bytes} bytes)", path.display()));
            }
            ProgressEvent::ColorNamed(color) => self.line(color_line(color, self.colored)),
        }
    }
}

/// Written vendor file, yellow when colours are on.
pub fn asset_line(path: &Path, colored: bool) -> String {
    let text = path.display().to_string();
    if colored { text.yellow().to_string() } else { text }
}

/// `Color <name> added (<hex>)`, drawn in the colour itself.
pub fn color_line(color: &NamedColor, colored: bool) -> String {
    let text = format!("Color {} added ({})", color.name, color.color.raw());
    if !colored {
        return text;
    }
    let [r, g, b] = color.color.rgb();
    text.truecolor(r, g, b).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitecraft_core::prelude::HexColor;

    fn red() -> NamedColor {
        NamedColor {
            color: HexColor::parse("#ff0000").unwrap(),
            name: "red".into(),
        }
    }

    #[test]
    fn plain_color_line() {
        assert_eq!(color_line(&red(), false), "Color red added (#ff0000)");
    }

    #[test]
    fn colored_line_uses_truecolor_escape() {
        let line = color_line(&red(), true);
        assert!(line.contains("\u{1b}[38;2;255;0;0m"));
        assert!(line.contains("Color red added (#ff0000)"));
    }

    #[test]
    fn asset_line_is_the_path() {
        let path = Path::new("js/materialize/bin/materialize.min.js");
        assert_eq!(asset_line(path, false), "js/materialize/bin/materialize.min.js");
        assert!(asset_line(path, true).starts_with("\u{1b}[33m"));
    }
}
