//! Domain value objects: ProjectName, CanonicalUrl, LanguageCode, Direction, SectionId.
//!
//! # Design
//!
//! These are pure value types, equality-by-value, no identity. Each one is
//! validated once at construction (`new` / `FromStr`) so that everything
//! downstream can rely on the invariant without re-checking it.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ProjectName ──────────────────────────────────────────────────────────────

/// Name of the project directory created under the working directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProjectName(String);

impl ProjectName {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let invalid = |reason: &str| DomainError::InvalidProjectName {
            name: name.clone(),
            reason: reason.into(),
        };

        if name.trim().is_empty() {
            return Err(invalid("name cannot be empty"));
        }
        if name.starts_with('.') {
            return Err(invalid("name cannot start with '.'"));
        }
        if name.contains('/') || name.contains('\\') {
            return Err(invalid("name cannot contain path separators"));
        }
        if let Some(c) = name
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
        {
            return Err(invalid(&format!("character '{c}' is not allowed")));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ProjectName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProjectName> for String {
    fn from(value: ProjectName) -> Self {
        value.0
    }
}

// ── CanonicalUrl ─────────────────────────────────────────────────────────────

/// The public address of the site, always carrying a scheme and no trailing `/`.
///
/// `www.example.com` is normalised to `https://www.example.com`. A path is
/// allowed; a query string, a fragment, quotes and angle brackets are not.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CanonicalUrl(String);

impl CanonicalUrl {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let raw = raw.as_ref();
        let trimmed = raw.trim();
        let invalid = |reason: &str| DomainError::InvalidUrl {
            value: raw.to_string(),
            reason: reason.into(),
        };

        if trimmed.is_empty() {
            return Err(invalid("URL cannot be empty"));
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(invalid("URL cannot contain whitespace"));
        }
        if trimmed.contains(['?', '#']) {
            return Err(invalid("URL cannot carry a query string or fragment"));
        }
        if trimmed.contains(['"', '\'', '<', '>', '`']) {
            return Err(invalid("URL cannot contain quotes or angle brackets"));
        }

        let with_scheme = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            trimmed.to_string()
        } else if trimmed.contains("://") {
            return Err(invalid("only http and https URLs are supported"));
        } else {
            format!("https://{trimmed}")
        };

        let normalised = with_scheme.trim_end_matches('/');
        if normalised.ends_with("://") {
            return Err(invalid("URL has no host"));
        }

        Ok(Self(normalised.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The address of the site's root page: a bare host gets its `/`, a URL
    /// with a path is used as is.
    pub fn root(&self) -> String {
        if self.has_path() {
            self.0.clone()
        } else {
            format!("{}/", self.0)
        }
    }

    fn has_path(&self) -> bool {
        self.0
            .split_once("://")
            .is_some_and(|(_, rest)| rest.contains('/'))
    }

    /// Join a site-relative path onto the URL (`sitemap.xml` → `<url>/sitemap.xml`).
    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self.0, path.trim_start_matches('/'))
    }
}

impl fmt::Display for CanonicalUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CanonicalUrl {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CanonicalUrl {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CanonicalUrl> for String {
    fn from(value: CanonicalUrl) -> Self {
        value.0
    }
}

// ── LanguageCode ─────────────────────────────────────────────────────────────

/// Document language, e.g. `en`, `fr`, `pt-BR`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageCode(String);

impl LanguageCode {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let code = raw.as_ref().trim();
        let valid = !code.is_empty()
            && !code.starts_with('-')
            && !code.ends_with('-')
            && code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');

        if valid {
            Ok(Self(code.to_string()))
        } else {
            Err(DomainError::InvalidLanguage {
                value: raw.as_ref().to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LanguageCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for LanguageCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LanguageCode> for String {
    fn from(value: LanguageCode) -> Self {
        value.0
    }
}

// ── Direction ────────────────────────────────────────────────────────────────

/// Reading direction of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ltr" => Ok(Self::Ltr),
            "rtl" => Ok(Self::Rtl),
            other => Err(DomainError::InvalidDirection {
                value: other.to_string(),
            }),
        }
    }
}

// ── SectionId ────────────────────────────────────────────────────────────────

/// A page section. Used verbatim as an HTML id/class and a CSS selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SectionId(String);

impl SectionId {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let name = raw.as_ref().trim();
        let invalid = |reason: &str| DomainError::InvalidSection {
            name: name.to_string(),
            reason: reason.into(),
        };

        let Some(first) = name.chars().next() else {
            return Err(invalid("section name cannot be empty"));
        };
        if !first.is_ascii_alphabetic() {
            return Err(invalid("section name must start with a letter"));
        }
        if let Some(c) = name
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_')))
        {
            return Err(invalid(&format!("character '{c}' is not allowed")));
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for SectionId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for SectionId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SectionId> for String {
    fn from(value: SectionId) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_name_rules() {
        assert!(ProjectName::new("demo").is_ok());
        assert!(ProjectName::new("my-site_2.0").is_ok());
        assert!(ProjectName::new("").is_err());
        assert!(ProjectName::new("   ").is_err());
        assert!(ProjectName::new(".hidden").is_err());
        assert!(ProjectName::new("..").is_err());
        assert!(ProjectName::new("a/b").is_err());
        assert!(ProjectName::new("a\\b").is_err());
        assert!(ProjectName::new("my site").is_err());
    }

    #[test]
    fn url_gets_https_scheme_and_loses_trailing_slash() {
        let url = CanonicalUrl::new("www.example.com/").unwrap();
        assert_eq!(url.as_str(), "https://www.example.com");

        let url = CanonicalUrl::new("http://example.org").unwrap();
        assert_eq!(url.as_str(), "http://example.org");
    }

    #[test]
    fn url_rejects_garbage() {
        assert!(CanonicalUrl::new("").is_err());
        assert!(CanonicalUrl::new("exa mple.com").is_err());
        assert!(CanonicalUrl::new("ftp://example.com").is_err());
        assert!(CanonicalUrl::new("https://").is_err());
        assert!(CanonicalUrl::new("example.com/?a=1&b=2").is_err());
        assert!(CanonicalUrl::new("example.com/#top").is_err());
        assert!(CanonicalUrl::new("example.com/\"><script>x</script>").is_err());
        assert!(CanonicalUrl::new("example.com/it's").is_err());
    }

    #[test]
    fn url_root_appends_slash_only_to_bare_hosts() {
        assert_eq!(CanonicalUrl::new("example.com").unwrap().root(), "https://example.com/");
        assert_eq!(CanonicalUrl::new("example.com/").unwrap().root(), "https://example.com/");
        assert_eq!(
            CanonicalUrl::new("example.com/page.html").unwrap().root(),
            "https://example.com/page.html"
        );
        assert_eq!(
            CanonicalUrl::new("http://example.com/blog/").unwrap().root(),
            "http://example.com/blog"
        );
    }

    #[test]
    fn url_join() {
        let url = CanonicalUrl::new("example.com").unwrap();
        assert_eq!(url.join("sitemap.xml"), "https://example.com/sitemap.xml");
        assert_eq!(url.join("/sitemap.xml"), "https://example.com/sitemap.xml");
    }

    #[test]
    fn language_codes() {
        assert!(LanguageCode::new("en").is_ok());
        assert!(LanguageCode::new("pt-BR").is_ok());
        assert!(LanguageCode::new("").is_err());
        assert!(LanguageCode::new("e n").is_err());
        assert!(LanguageCode::new("-en").is_err());
    }

    #[test]
    fn direction_parses_case_insensitively() {
        assert_eq!("LTR".parse::<Direction>().unwrap(), Direction::Ltr);
        assert_eq!("rtl".parse::<Direction>().unwrap(), Direction::Rtl);
        assert!("up".parse::<Direction>().is_err());
        assert_eq!(Direction::default(), Direction::Ltr);
    }

    #[test]
    fn section_rules() {
        assert!(SectionId::new("intro").is_ok());
        assert!(SectionId::new("call-to_action2").is_ok());
        assert!(SectionId::new("").is_err());
        assert!(SectionId::new("2col").is_err());
        assert!(SectionId::new("a b").is_err());
        assert!(SectionId::new("x<y").is_err());
    }
}
