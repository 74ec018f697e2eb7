//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use sitecraft_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{SitecraftError, SitecraftResult},
};

/// In-memory filesystem for testing.
///
/// Clones share the same contents, so a test can hand one clone to a
/// service and inspect the other.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, Vec<u8>>,
    directories: HashSet<PathBuf>,
}

fn poisoned() -> SitecraftError {
    SitecraftError::Internal {
        message: "memory filesystem lock poisoned".into(),
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Read a file's bytes (testing helper).
    pub fn read(&self, path: &Path) -> Option<Vec<u8>> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// Read a file as UTF-8 text (testing helper).
    pub fn read_to_string(&self, path: &Path) -> Option<String> {
        self.read(path).and_then(|b| String::from_utf8(b).ok())
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let Ok(inner) = self.inner.read() else {
            return Vec::new();
        };
        let mut files: Vec<_> = inner.files.keys().cloned().collect();
        files.sort();
        files
    }

    /// Whether `path` was created as a directory.
    pub fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryFilesystemInner {
    fn check_parent(&self, path: &Path) -> SitecraftResult<()> {
        let missing = path
            .parent()
            .is_some_and(|p| !p.as_os_str().is_empty() && !self.directories.contains(p));
        if missing {
            return Err(ApplicationError::FilesystemFailure {
                path: path.to_path_buf(),
                reason: "Parent directory does not exist".into(),
            }
            .into());
        }
        Ok(())
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> SitecraftResult<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> SitecraftResult<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        inner.check_parent(path)?;
        inner.files.insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }

    fn write_new_file(&self, path: &Path, content: &[u8]) -> SitecraftResult<bool> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        if inner.files.contains_key(path) {
            return Ok(false);
        }
        inner.check_parent(path)?;
        inner.files.insert(path.to_path_buf(), content.to_vec());
        Ok(true)
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directories_include_ancestors() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("demo/js/materialize")).unwrap();

        assert!(fs.is_dir(Path::new("demo")));
        assert!(fs.is_dir(Path::new("demo/js")));
        assert!(fs.exists(Path::new("demo/js/materialize")));
    }

    #[test]
    fn writes_need_a_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("demo/index.html"), b"").is_err());

        fs.create_dir_all(Path::new("demo")).unwrap();
        fs.write_file(Path::new("demo/index.html"), b"<html>").unwrap();
        assert_eq!(
            fs.read_to_string(Path::new("demo/index.html")).as_deref(),
            Some("<html>")
        );
    }

    #[test]
    fn clones_share_contents() {
        let fs = MemoryFilesystem::new();
        let other = fs.clone();
        fs.create_dir_all(Path::new("a")).unwrap();
        fs.write_new_file(Path::new("a/b"), b"1").unwrap();

        assert!(!other.write_new_file(Path::new("a/b"), b"2").unwrap());
        assert_eq!(other.read(Path::new("a/b")), Some(b"1".to_vec()));
        assert_eq!(other.list_files(), vec![PathBuf::from("a/b")]);
    }
}
