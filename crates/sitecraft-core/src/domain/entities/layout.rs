use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Directory that holds scripts, both in the archive and in the project.
pub const SCRIPT_DIR: &str = "js";

/// Directory that holds stylesheet sources, both in the archive and in the project.
pub const STYLE_DIR: &str = "sass";

/// Folder inserted into vendored asset paths (`js/<vendor>/...`).
pub const VENDOR_DIR: &str = "materialize";

/// Directories created by the first pipeline step, relative to the project root.
pub const PROJECT_DIRECTORIES: &[&str] = &["css", "files", "img", "img/social", "js", "sass"];

/// Vendor directories created before the framework archive is unpacked,
/// whether or not any entry lands in them.
pub const VENDOR_DIRECTORIES: &[&str] = &[
    "sass/materialize",
    "sass/materialize/components",
    "sass/materialize/components/forms",
    "js/materialize",
    "js/materialize/bin",
];

pub const MAIN_SCRIPT: &str = "js/main.js";
pub const MAIN_STYLESHEET: &str = "sass/main.scss";
pub const HTML_ENTRY: &str = "index.html";
pub const HTACCESS: &str = ".htaccess";
pub const ROBOTS: &str = "robots.txt";
pub const SITEMAP: &str = "sitemap.xml";

/// Empty files created before any generator runs.
pub const PLACEHOLDER_FILES: &[&str] = &[MAIN_SCRIPT, MAIN_STYLESHEET, HTML_ENTRY];

/// Where the third-party assets come from.
///
/// The defaults pin Materialize 1.0.0 and jQuery 3.4.1; other values exist
/// for mirrors and tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetSources {
    /// Zip archive of the framework sources.
    pub framework_archive_url: String,
    /// Archive entry that is never copied (the unminified bundle).
    pub excluded_entry: String,
    /// Single-file script library, saved as `js/jquery-3.4.1.min.js`.
    pub script_library_url: String,
}

impl AssetSources {
    pub const FRAMEWORK_ARCHIVE_URL: &'static str =
        "https://github.com/Dogfalo/materialize/releases/download/1.0.0/materialize-src-v1.0.0.zip";
    pub const EXCLUDED_ENTRY: &'static str = "materialize-src/js/bin/materialize.js";
    pub const SCRIPT_LIBRARY_URL: &'static str = "http://code.jquery.com/jquery-3.4.1.min.js";
    pub const SCRIPT_LIBRARY_FILE: &'static str = "jquery-3.4.1.min.js";

    /// Project-relative path of the downloaded script library.
    pub fn script_library_path(&self) -> PathBuf {
        Path::new(SCRIPT_DIR).join(Self::SCRIPT_LIBRARY_FILE)
    }
}

impl Default for AssetSources {
    fn default() -> Self {
        Self {
            framework_archive_url: Self::FRAMEWORK_ARCHIVE_URL.into(),
            excluded_entry: Self::EXCLUDED_ENTRY.into(),
            script_library_url: Self::SCRIPT_LIBRARY_URL.into(),
        }
    }
}
