//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use carve_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{CarveError, CarveResult},
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can hand one clone to a service and
/// inspect the other afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    failing: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every mutation targeting `path` fail (testing helper).
    pub fn fail_on(&self, path: impl Into<PathBuf>) {
        self.write().failing.insert(path.into());
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        self.read().files.get(path).cloned()
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<_> = self.read().files.keys().cloned().collect();
        files.sort();
        files
    }

    fn read(&self) -> RwLockReadGuard<'_, MemoryFilesystemInner> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, MemoryFilesystemInner> {
        self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl MemoryFilesystemInner {
    fn check(&self, path: &Path) -> CarveResult<()> {
        if self.failing.contains(path) {
            return Err(failure(path, "Injected failure"));
        }
        Ok(())
    }

    fn has_parent(&self, path: &Path) -> bool {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => self.directories.contains(parent),
            _ => true,
        }
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> CarveResult<()> {
        let mut inner = self.write();
        inner.check(path)?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn create_dir(&self, path: &Path) -> CarveResult<()> {
        let mut inner = self.write();
        inner.check(path)?;

        if inner.directories.contains(path) || inner.files.contains_key(path) {
            return Err(failure(path, "Already exists"));
        }
        if !inner.has_parent(path) {
            return Err(failure(path, "Parent directory does not exist"));
        }

        inner.directories.insert(path.to_path_buf());
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> CarveResult<()> {
        let mut inner = self.write();
        inner.check(path)?;

        if !inner.has_parent(path) {
            return Err(failure(path, "Parent directory does not exist"));
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.read();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }
}

fn failure(path: &Path, reason: &str) -> CarveError {
    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.create_dir(Path::new("a/b")).is_err());

        fs.create_dir_all(Path::new("a")).unwrap();
        fs.create_dir(Path::new("a/b")).unwrap();
        assert!(fs.exists(Path::new("a/b")));
    }

    #[test]
    fn create_dir_rejects_existing() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("a/b")).unwrap();
        assert!(fs.create_dir(Path::new("a/b")).is_err());
    }

    #[test]
    fn injected_failures() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("a")).unwrap();
        fs.fail_on("a/x.js");

        assert!(fs.write_file(Path::new("a/x.js"), "").is_err());
        assert!(fs.write_file(Path::new("a/y.js"), "y").is_ok());
        assert_eq!(fs.list_files(), vec![PathBuf::from("a/y.js")]);
    }
}
