//! Routing rules for framework archive entries.
//!
//! The framework ships as a zip whose entries look like
//! `materialize-src/js/bin/materialize.min.js`. Only the script and
//! stylesheet sources are copied, re-homed under a vendor folder:
//!
//! ```text
//! materialize-src/js/bin/materialize.min.js -> js/materialize/bin/materialize.min.js
//! materialize-src/sass/components/_buttons.scss -> sass/materialize/components/_buttons.scss
//! materialize-src/LICENSE                   -> (filtered)
//! ```
//!
//! Everything here is pure so it can be tested without an archive.

use std::fmt;
use std::path::PathBuf;

use crate::domain::entities::layout::{SCRIPT_DIR, STYLE_DIR, VENDOR_DIR};

/// An archive path split into its `/`-separated segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryPath {
    segments: Vec<String>,
}

impl EntryPath {
    /// Split an archive path. Empty segments (`a//b`, trailing `/`) are dropped.
    pub fn parse(raw: &str) -> Self {
        Self {
            segments: raw
                .split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
                .collect(),
        }
    }

    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Relative filesystem path built from the segments.
    pub fn to_path_buf(&self) -> PathBuf {
        self.segments.iter().collect()
    }

    /// Directory segments: everything but the last one.
    fn directories(&self) -> &[String] {
        match self.segments.split_last() {
            Some((_, dirs)) => dirs,
            None => &[],
        }
    }
}

impl fmt::Display for EntryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("/"))
    }
}

/// What to do with one archive entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryRoute {
    /// Write the entry to this project-relative destination.
    Copy(EntryPath),
    /// The one entry that is always left out.
    Excluded,
    /// Not a script or stylesheet source, or a directory record.
    Filtered,
    /// An asset directory appears deeper than directly under the wrapper
    /// folder: the upstream layout changed, so the entry is not copied rather
    /// than filed in the wrong place.
    Misplaced,
    /// Path tries to climb out of the project (`..`, `.`).
    Unsafe,
}

fn is_asset_dir(segment: &str) -> bool {
    segment == SCRIPT_DIR || segment == STYLE_DIR
}

/// Decide where an archive entry goes.
///
/// `raw` is the entry name as stored in the archive, `is_dir` whether the
/// entry is a directory record, `excluded` the single path never copied.
pub fn route_entry(raw: &str, is_dir: bool, excluded: &str) -> EntryRoute {
    if raw == excluded {
        return EntryRoute::Excluded;
    }

    let path = EntryPath::parse(raw);
    if path.segments().iter().any(|s| s == ".." || s == ".") {
        return EntryRoute::Unsafe;
    }

    // The wrapper folder itself never counts as an asset directory.
    let has_asset_dir = path.directories().iter().skip(1).any(|s| is_asset_dir(s));
    if !has_asset_dir || is_dir {
        return EntryRoute::Filtered;
    }

    let mut rest: Vec<String> = path.segments()[1..].to_vec();
    if !is_asset_dir(&rest[0]) {
        return EntryRoute::Misplaced;
    }

    rest.insert(1, VENDOR_DIR.to_string());
    EntryRoute::Copy(EntryPath::from_segments(rest))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXCLUDED: &str = "materialize-src/js/bin/materialize.js";

    fn copy_to(raw: &str) -> String {
        match route_entry(raw, false, EXCLUDED) {
            EntryRoute::Copy(dest) => dest.to_string(),
            other => panic!("{raw} routed to {other:?}"),
        }
    }

    #[test]
    fn parse_drops_empty_segments() {
        let path = EntryPath::parse("a//b/c/");
        assert_eq!(path.segments(), ["a", "b", "c"]);
        assert_eq!(path.to_string(), "a/b/c");
        assert!(EntryPath::parse("").is_empty());
    }

    #[test]
    fn scripts_get_vendor_folder() {
        assert_eq!(
            copy_to("materialize-src/js/bin/materialize.min.js"),
            "js/materialize/bin/materialize.min.js"
        );
        assert_eq!(copy_to("materialize-src/js/buttons.js"), "js/materialize/buttons.js");
    }

    #[test]
    fn stylesheets_get_vendor_folder() {
        assert_eq!(
            copy_to("materialize-src/sass/components/forms/_input-fields.scss"),
            "sass/materialize/components/forms/_input-fields.scss"
        );
        assert_eq!(
            copy_to("materialize-src/sass/materialize.scss"),
            "sass/materialize/materialize.scss"
        );
    }

    #[test]
    fn excluded_entry_is_never_copied() {
        assert_eq!(route_entry(EXCLUDED, false, EXCLUDED), EntryRoute::Excluded);
    }

    #[test]
    fn other_entries_are_filtered() {
        for raw in [
            "materialize-src/LICENSE",
            "materialize-src/README.md",
            "materialize-src/",
            "materialize-src/js",
            "js/loose.js",
            "materialize-src/javascript/x.js",
        ] {
            assert_eq!(route_entry(raw, false, EXCLUDED), EntryRoute::Filtered, "{raw}");
        }
    }

    #[test]
    fn directory_records_are_filtered() {
        assert_eq!(
            route_entry("materialize-src/js/bin/", true, EXCLUDED),
            EntryRoute::Filtered
        );
    }

    #[test]
    fn deeper_layout_is_reported_not_misfiled() {
        assert_eq!(
            route_entry("materialize-src/extra/js/x.js", false, EXCLUDED),
            EntryRoute::Misplaced
        );
    }

    #[test]
    fn traversal_is_unsafe() {
        assert_eq!(
            route_entry("materialize-src/js/../../etc/passwd", false, EXCLUDED),
            EntryRoute::Unsafe
        );
    }

    #[test]
    fn destination_path_is_relative() {
        let EntryRoute::Copy(dest) = route_entry("w/js/a/b.js", false, EXCLUDED) else {
            panic!("expected copy");
        };
        let path = dest.to_path_buf();
        assert!(path.is_relative());
        assert_eq!(path, PathBuf::from("js").join("materialize").join("a").join("b.js"));
    }
}
