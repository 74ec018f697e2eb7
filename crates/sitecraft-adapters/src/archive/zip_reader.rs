use std::io::Cursor;
use tracing::debug;
use zip::ZipArchive;

use sitecraft_core::{
    application::{
        ApplicationError,
        ports::{ArchiveEntry, ArchiveReader, EntryVisitor},
    },
    error::{SitecraftError, SitecraftResult},
};

/// Reads zip archives held in memory.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZipArchiveReader;

impl ZipArchiveReader {
    pub fn new() -> Self {
        Self
    }
}

fn parse_failure(err: zip::result::ZipError) -> SitecraftError {
    ApplicationError::ArchiveParseFailure {
        reason: err.to_string(),
    }
    .into()
}

impl ArchiveReader for ZipArchiveReader {
    fn visit(&self, archive: &[u8], visitor: &mut EntryVisitor<'_>) -> SitecraftResult<()> {
        let mut zip = ZipArchive::new(Cursor::new(archive)).map_err(parse_failure)?;
        debug!(entries = zip.len(), "Zip opened");

        for index in 0..zip.len() {
            let mut file = zip.by_index(index).map_err(parse_failure)?;
            let name = file.name().to_owned();
            let is_dir = file.is_dir();

            visitor(ArchiveEntry {
                name: &name,
                is_dir,
                contents: &mut file,
            })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitecraft_core::error::ErrorKind;
    use std::io::{Read, Write};
    use zip::write::{SimpleFileOptions, ZipWriter};

    fn build(entries: &[(&str, Option<&[u8]>)]) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();
        for (name, content) in entries {
            match content {
                Some(bytes) => {
                    writer.start_file(*name, options).unwrap();
                    writer.write_all(bytes).unwrap();
                }
                None => writer.add_directory(*name, options).unwrap(),
            }
        }
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn visits_entries_in_archive_order() {
        let bytes = build(&[
            ("root/", None),
            ("root/js/a.js", Some(&b"let a;"[..])),
            ("root/sass/b.scss", Some(&b""[..])),
        ]);

        let mut seen = Vec::new();
        ZipArchiveReader::new()
            .visit(&bytes, &mut |entry| {
                let mut content = String::new();
                entry.contents.read_to_string(&mut content).unwrap();
                seen.push((entry.name.to_string(), entry.is_dir, content));
                Ok(())
            })
            .unwrap();

        assert_eq!(
            seen,
            vec![
                ("root/".to_string(), true, String::new()),
                ("root/js/a.js".to_string(), false, "let a;".to_string()),
                ("root/sass/b.scss".to_string(), false, String::new()),
            ]
        );
    }

    #[test]
    fn garbage_is_a_parse_failure() {
        let err = ZipArchiveReader::new()
            .visit(b"definitely not a zip", &mut |_| Ok(()))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArchiveParseFailure);
    }

    #[test]
    fn visitor_errors_stop_the_walk() {
        let bytes = build(&[("a/one", Some(&b"1"[..])), ("a/two", Some(&b"2"[..]))]);
        let mut calls = 0;

        let err = ZipArchiveReader::new()
            .visit(&bytes, &mut |_| {
                calls += 1;
                Err(SitecraftError::Internal {
                    message: "stop".into(),
                })
            })
            .unwrap_err();

        assert_eq!(calls, 1);
        assert_eq!(err.kind(), ErrorKind::Internal);
    }
}
