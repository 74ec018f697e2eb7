//! Local filesystem adapter using std::fs.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use sitecraft_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{SitecraftError, SitecraftResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> SitecraftResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> SitecraftResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn write_new_file(&self, path: &Path, content: &[u8]) -> SitecraftResult<bool> {
        let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Ok(false),
            Err(e) => return Err(map_io_error(path, e, "create file")),
        };
        file.write_all(content)
            .map_err(|e| map_io_error(path, e, "write file"))?;
        Ok(true)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> SitecraftError {
    ApplicationError::filesystem(path, operation, &e).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_new_file_never_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.txt");
        let fs = LocalFilesystem::new();

        assert!(fs.write_new_file(&path, b"first").unwrap());
        assert!(!fs.write_new_file(&path, b"second").unwrap());
        assert_eq!(std::fs::read(&path).unwrap(), b"first");
    }

    #[test]
    fn write_file_truncates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("index.html");
        let fs = LocalFilesystem::new();

        fs.write_file(&path, b"a much longer placeholder").unwrap();
        fs.write_file(&path, b"short").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "short");
    }

    #[test]
    fn missing_parent_is_a_filesystem_failure() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope").join("file.txt");

        let err = LocalFilesystem::new().write_file(&path, b"x").unwrap_err();
        assert_eq!(
            err.kind(),
            sitecraft_core::error::ErrorKind::FilesystemFailure
        );
    }
}
