//! Interactive questions for `sitecraft new`.
//!
//! Only values without a flag are asked for; every question defaults to
//! the configured preset.

use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};

use crate::{cli::NewArgs, config::Presets, error::CliResult};

use super::new::Answers;

const DIRECTIONS: [&str; 2] = ["ltr", "rtl"];

pub fn ask(args: &NewArgs, presets: &Presets) -> CliResult<Answers> {
    let theme = ColorfulTheme::default();
    let mut answers = Answers::default();

    let text = |prompt: &str, default: &str| -> CliResult<String> {
        Ok(Input::<String>::with_theme(&theme)
            .with_prompt(prompt)
            .default(default.to_owned())
            .interact_text()?)
    };
    let list = |prompt: &str, default: &[String]| -> CliResult<Vec<String>> {
        let raw = Input::<String>::with_theme(&theme)
            .with_prompt(prompt)
            .default(default.join(" "))
            .allow_empty(true)
            .interact_text()?;
        Ok(raw.split_whitespace().map(str::to_owned).collect())
    };
    let yes_no = |prompt: &str, default: bool| -> CliResult<bool> {
        Ok(Confirm::with_theme(&theme)
            .with_prompt(prompt)
            .default(default)
            .interact()?)
    };

    if args.title.is_none() {
        answers.title = Some(text("Title", &presets.title)?);
    }
    if args.description.is_none() {
        answers.description = Some(text("Description", &presets.description)?);
    }
    if args.url.is_none() {
        answers.url = Some(text("Site URL", &presets.url)?);
    }
    if args.lang.is_none() {
        answers.lang = Some(text("Language code", &presets.lang)?);
    }
    if args.direction.is_none() {
        let default = DIRECTIONS
            .iter()
            .position(|d| *d == presets.direction)
            .unwrap_or(0);
        let index = Select::with_theme(&theme)
            .with_prompt("Text direction")
            .items(&DIRECTIONS)
            .default(default)
            .interact()?;
        answers.direction = Some(DIRECTIONS[index].to_owned());
    }
    if args.colors.is_none() {
        answers.colors = Some(list("Colors (#rrggbb, space separated)", &presets.colors)?);
    }
    if args.sections.is_none() {
        answers.sections = Some(list("Sections (space separated)", &presets.sections)?);
    }
    if args.opengraph_flag().is_none() {
        answers.opengraph = Some(yes_no("Add OpenGraph tags?", presets.opengraph)?);
    }
    if args.jquery_flag().is_none() {
        answers.jquery = Some(yes_no("Download jQuery?", presets.jquery)?);
    }
    if args.htaccess_flag().is_none() {
        answers.htaccess = Some(yes_no("Write .htaccess?", presets.htaccess)?);
    }
    if args.robots_flag().is_none() {
        answers.robots = Some(yes_no("Write robots.txt?", presets.robots)?);
    }
    if args.sitemap_flag().is_none() {
        answers.sitemap = Some(yes_no("Write sitemap.xml?", presets.sitemap)?);
    }

    Ok(answers)
}
