use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{
    color::HexColor,
    error::DomainError,
    value_objects::{CanonicalUrl, Direction, LanguageCode, ProjectName, SectionId},
};

/// Fully-resolved scaffold configuration.
///
/// Built once by the input layer through [`ScaffoldOptions::builder`] and
/// handed to the pipeline by value. Every field has already been validated;
/// nothing in the pipeline reads ambient defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaffoldOptions {
    name: ProjectName,
    title: String,
    description: String,
    url: CanonicalUrl,
    lang: LanguageCode,
    direction: Direction,
    opengraph: bool,
    colors: Vec<HexColor>,
    sections: Vec<SectionId>,
    script_library: bool,
    htaccess: bool,
    robots: bool,
    sitemap: bool,
    last_modified: Option<NaiveDate>,
}

impl ScaffoldOptions {
    pub fn builder() -> ScaffoldOptionsBuilder {
        ScaffoldOptionsBuilder::default()
    }

    pub fn name(&self) -> &ProjectName {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn url(&self) -> &CanonicalUrl {
        &self.url
    }

    pub fn lang(&self) -> &LanguageCode {
        &self.lang
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn opengraph(&self) -> bool {
        self.opengraph
    }

    pub fn colors(&self) -> &[HexColor] {
        &self.colors
    }

    pub fn sections(&self) -> &[SectionId] {
        &self.sections
    }

    pub fn script_library(&self) -> bool {
        self.script_library
    }

    pub fn htaccess(&self) -> bool {
        self.htaccess
    }

    pub fn robots(&self) -> bool {
        self.robots
    }

    pub fn sitemap(&self) -> bool {
        self.sitemap
    }

    pub fn last_modified(&self) -> Option<NaiveDate> {
        self.last_modified
    }
}

/// Builder for [`ScaffoldOptions`].
///
/// Raw strings are accepted and parsed in [`build`](Self::build), so the
/// first invalid value is reported as a [`DomainError`]. Only `name` is
/// required; the rest fall back to neutral values.
#[derive(Debug, Clone, Default)]
pub struct ScaffoldOptionsBuilder {
    name: Option<String>,
    title: Option<String>,
    description: Option<String>,
    url: Option<String>,
    lang: Option<String>,
    direction: Option<String>,
    opengraph: bool,
    colors: Vec<String>,
    sections: Vec<String>,
    script_library: bool,
    htaccess: bool,
    robots: bool,
    sitemap: bool,
    last_modified: Option<NaiveDate>,
}

impl ScaffoldOptionsBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn direction(mut self, direction: impl Into<String>) -> Self {
        self.direction = Some(direction.into());
        self
    }

    pub fn opengraph(mut self, enabled: bool) -> Self {
        self.opengraph = enabled;
        self
    }

    pub fn colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    pub fn sections<I, S>(mut self, sections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sections = sections.into_iter().map(Into::into).collect();
        self
    }

    pub fn script_library(mut self, enabled: bool) -> Self {
        self.script_library = enabled;
        self
    }

    pub fn htaccess(mut self, enabled: bool) -> Self {
        self.htaccess = enabled;
        self
    }

    pub fn robots(mut self, enabled: bool) -> Self {
        self.robots = enabled;
        self
    }

    pub fn sitemap(mut self, enabled: bool) -> Self {
        self.sitemap = enabled;
        self
    }

    pub fn last_modified(mut self, date: NaiveDate) -> Self {
        self.last_modified = Some(date);
        self
    }

    pub fn build(self) -> Result<ScaffoldOptions, DomainError> {
        let name = ProjectName::new(
            self.name
                .ok_or(DomainError::MissingRequiredField { field: "name" })?,
        )?;

        let title = self.title.unwrap_or_else(|| name.to_string());
        let url = CanonicalUrl::new(self.url.as_deref().unwrap_or("www.example.com"))?;
        let lang = LanguageCode::new(self.lang.as_deref().unwrap_or("en"))?;
        let direction = match self.direction.as_deref() {
            Some(raw) => raw.parse()?,
            None => Direction::default(),
        };

        let mut colors = Vec::with_capacity(self.colors.len());
        let mut seen_colors = HashSet::new();
        for raw in self.colors.iter().filter(|c| !c.trim().is_empty()) {
            let color = HexColor::parse(raw)?;
            if !seen_colors.insert(color.clone()) {
                return Err(DomainError::DuplicateColor { value: raw.clone() });
            }
            colors.push(color);
        }

        let mut sections = Vec::with_capacity(self.sections.len());
        let mut seen_sections = HashSet::new();
        for raw in self.sections.iter().filter(|s| !s.trim().is_empty()) {
            let section = SectionId::new(raw)?;
            if !seen_sections.insert(section.clone()) {
                return Err(DomainError::DuplicateSection {
                    name: section.to_string(),
                });
            }
            sections.push(section);
        }

        Ok(ScaffoldOptions {
            name,
            title,
            description: self.description.unwrap_or_default(),
            url,
            lang,
            direction,
            opengraph: self.opengraph,
            colors,
            sections,
            script_library: self.script_library,
            htaccess: self.htaccess,
            robots: self.robots,
            sitemap: self.sitemap,
            last_modified: self.last_modified,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_required() {
        assert_eq!(
            ScaffoldOptions::builder().build().unwrap_err(),
            DomainError::MissingRequiredField { field: "name" }
        );
    }

    #[test]
    fn minimal_options_use_neutral_defaults() {
        let opts = ScaffoldOptions::builder().name("demo").build().unwrap();

        assert_eq!(opts.name().as_str(), "demo");
        assert_eq!(opts.title(), "demo");
        assert_eq!(opts.url().as_str(), "https://www.example.com");
        assert_eq!(opts.lang().as_str(), "en");
        assert_eq!(opts.direction(), Direction::Ltr);
        assert!(opts.colors().is_empty());
        assert!(opts.sections().is_empty());
        assert!(!opts.script_library() && !opts.htaccess() && !opts.robots() && !opts.sitemap());
    }

    #[test]
    fn colors_and_sections_keep_order() {
        let opts = ScaffoldOptions::builder()
            .name("demo")
            .colors(["#00f", "#ff0000"])
            .sections(["intro", "contact"])
            .build()
            .unwrap();

        let hexes: Vec<_> = opts.colors().iter().map(HexColor::hex).collect();
        assert_eq!(hexes, ["#0000ff", "#ff0000"]);
        let sections: Vec<_> = opts.sections().iter().map(SectionId::as_str).collect();
        assert_eq!(sections, ["intro", "contact"]);
    }

    #[test]
    fn blank_entries_are_ignored() {
        // Space-separated prompt answers produce empty fragments.
        let opts = ScaffoldOptions::builder()
            .name("demo")
            .colors(["", "#fff", " "])
            .sections(["", "intro"])
            .build()
            .unwrap();
        assert_eq!(opts.colors().len(), 1);
        assert_eq!(opts.sections().len(), 1);
    }

    #[test]
    fn duplicate_colors_are_rejected_after_normalisation() {
        let err = ScaffoldOptions::builder()
            .name("demo")
            .colors(["#f00", "#FF0000"])
            .build()
            .unwrap_err();
        assert!(matches!(err, DomainError::DuplicateColor { .. }));
    }

    #[test]
    fn duplicate_sections_are_rejected() {
        let err = ScaffoldOptions::builder()
            .name("demo")
            .sections(["intro", "intro"])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::DuplicateSection {
                name: "intro".into()
            }
        );
    }

    #[test]
    fn invalid_values_surface_domain_errors() {
        let base = || ScaffoldOptions::builder().name("demo");

        assert!(matches!(
            base().colors(["nope"]).build(),
            Err(DomainError::InvalidColor { .. })
        ));
        assert!(matches!(
            base().direction("sideways").build(),
            Err(DomainError::InvalidDirection { .. })
        ));
        assert!(matches!(
            base().url("").build(),
            Err(DomainError::InvalidUrl { .. })
        ));
        assert!(matches!(
            ScaffoldOptions::builder().name("../escape").build(),
            Err(DomainError::InvalidProjectName { .. })
        ));
    }
}
