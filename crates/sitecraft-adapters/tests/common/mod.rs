//! Shared fixtures for adapter integration tests.

#![allow(dead_code)]

use std::io::{Cursor, Write};
use zip::write::{SimpleFileOptions, ZipWriter};

/// Entries of a small archive shaped like the framework release.
pub const FRAMEWORK_ENTRIES: &[(&str, &str)] = &[
    ("materialize-src/", ""),
    ("materialize-src/js/", ""),
    ("materialize-src/js/bin/", ""),
    ("materialize-src/js/bin/materialize.js", "/* full bundle */"),
    ("materialize-src/js/bin/materialize.min.js", "/* min bundle */"),
    ("materialize-src/js/buttons.js", "var buttons;"),
    ("materialize-src/sass/", ""),
    ("materialize-src/sass/materialize.scss", "@import \"components/color\";"),
    ("materialize-src/sass/components/_color.scss", "$primary: red;"),
    ("materialize-src/sass/components/forms/_forms.scss", ""),
    ("materialize-src/README.md", "# Materialize"),
    ("materialize-src/docs/js/init.js", "docs only"),
];

/// Build a zip from `(name, content)` pairs; names ending in `/` become
/// directory records.
pub fn zip_archive(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    for (name, content) in entries {
        if name.ends_with('/') {
            writer.add_directory(*name, options).unwrap();
        } else {
            writer.start_file(*name, options).unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
    }
    writer.finish().unwrap().into_inner()
}

pub fn framework_archive() -> Vec<u8> {
    zip_archive(FRAMEWORK_ENTRIES)
}
