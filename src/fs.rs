//! File system provider used by the generation pipeline.
//!
//! The pipeline never touches `std::fs` directly. It goes through the
//! [`FileSystem`] trait so that runs can be executed against the real disk
//! ([`OsFileSystem`]) or fully in memory ([`MemoryFileSystem`]).

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors reported by a file system provider.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FsError {
    /// The path does not exist
    #[error("not found: {}", .0.display())]
    NotFound(PathBuf),
    /// The process lacks permission for the operation
    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),
    /// No space left on the target device
    #[error("disk full while writing {}", .0.display())]
    DiskFull(PathBuf),
    /// Any other I/O failure
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path involved in the failed operation
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },
}

impl FsError {
    /// Classify an `io::Error` for the given path.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            ErrorKind::StorageFull => FsError::DiskFull(path.to_path_buf()),
            _ => FsError::Io { path: path.to_path_buf(), source: err },
        }
    }
}

/// Operations the pipeline needs from the file system.
pub trait FileSystem {
    /// Whether a file or directory exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// File names (not paths) directly inside `dir`, in listing order.
    ///
    /// Subdirectories are not included.
    fn list_files(&self, dir: &Path) -> Result<Vec<String>, FsError>;

    /// Read a whole file as UTF-8 text.
    fn read_file(&self, path: &Path) -> Result<String, FsError>;

    /// Create `dir` and all of its missing parents.
    fn make_directories(&self, dir: &Path) -> Result<(), FsError>;

    /// Replace the contents of `path` with `content`.
    ///
    /// Implementations must either write the whole content or leave any
    /// existing file untouched.
    fn write_file(&self, path: &Path, content: &str) -> Result<(), FsError>;
}

/// File system provider backed by the operating system.
///
/// Directory listings are sorted by file name so that generation order does
/// not depend on the platform's `readdir` order.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl OsFileSystem {
    /// Create a new OS-backed provider.
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for OsFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn list_files(&self, dir: &Path) -> Result<Vec<String>, FsError> {
        let entries = fs::read_dir(dir).map_err(|e| FsError::from_io(dir, e))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| FsError::from_io(dir, e))?;
            let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
            if !is_file {
                continue;
            }
            // Non UTF-8 names cannot become identifiers anyway
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }

        names.sort();
        Ok(names)
    }

    fn read_file(&self, path: &Path) -> Result<String, FsError> {
        fs::read_to_string(path).map_err(|e| FsError::from_io(path, e))
    }

    fn make_directories(&self, dir: &Path) -> Result<(), FsError> {
        fs::create_dir_all(dir).map_err(|e| FsError::from_io(dir, e))
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), FsError> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let mut temp =
            tempfile::NamedTempFile::new_in(parent).map_err(|e| FsError::from_io(path, e))?;
        temp.write_all(content.as_bytes()).map_err(|e| FsError::from_io(path, e))?;
        temp.flush().map_err(|e| FsError::from_io(path, e))?;
        temp.persist(path).map_err(|e| FsError::from_io(path, e.error))?;
        Ok(())
    }
}

/// In-memory file system provider.
///
/// Files keep their insertion order in listings, which makes it easy to
/// reproduce a specific directory-listing order in tests. Paths can be marked
/// read-only to simulate permission failures.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    files: RefCell<Vec<(PathBuf, String)>>,
    dirs: RefCell<BTreeSet<PathBuf>>,
    read_only: RefCell<BTreeSet<PathBuf>>,
    write_count: RefCell<BTreeMap<PathBuf, usize>>,
}

impl MemoryFileSystem {
    /// Create an empty in-memory file system.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a file, creating its parent directories.
    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<String>) {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        let content = content.into();
        let mut files = self.files.borrow_mut();
        match files.iter_mut().find(|(p, _)| *p == path) {
            Some(entry) => entry.1 = content,
            None => files.push((path, content)),
        }
    }

    /// Add a directory and all of its ancestors.
    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let mut dirs = self.dirs.borrow_mut();
        for ancestor in path.as_ref().ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            dirs.insert(ancestor.to_path_buf());
        }
    }

    /// Deny writes and directory creation at or below `path`.
    pub fn set_read_only(&self, path: impl AsRef<Path>) {
        self.read_only.borrow_mut().insert(path.as_ref().to_path_buf());
    }

    /// Current content of a file, if present.
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        let path = path.as_ref();
        self.files.borrow().iter().find(|(p, _)| p == path).map(|(_, c)| c.clone())
    }

    /// Number of successful writes to `path`.
    pub fn writes(&self, path: impl AsRef<Path>) -> usize {
        self.write_count.borrow().get(path.as_ref()).copied().unwrap_or(0)
    }

    fn is_read_only(&self, path: &Path) -> bool {
        self.read_only.borrow().iter().any(|ro| path.starts_with(ro))
    }
}

impl FileSystem for MemoryFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.dirs.borrow().contains(path) || self.files.borrow().iter().any(|(p, _)| p == path)
    }

    fn list_files(&self, dir: &Path) -> Result<Vec<String>, FsError> {
        if !self.dirs.borrow().contains(dir) {
            return Err(FsError::NotFound(dir.to_path_buf()));
        }
        Ok(self
            .files
            .borrow()
            .iter()
            .filter(|(p, _)| p.parent() == Some(dir))
            .filter_map(|(p, _)| p.file_name().and_then(|n| n.to_str()).map(str::to_string))
            .collect())
    }

    fn read_file(&self, path: &Path) -> Result<String, FsError> {
        self.contents(path).ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn make_directories(&self, dir: &Path) -> Result<(), FsError> {
        if self.is_read_only(dir) && !self.exists(dir) {
            return Err(FsError::PermissionDenied(dir.to_path_buf()));
        }
        self.add_dir(dir);
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), FsError> {
        if self.is_read_only(path) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !self.exists(parent) => {
                return Err(FsError::NotFound(parent.to_path_buf()));
            }
            _ => {}
        }
        self.add_file(path, content);
        *self.write_count.borrow_mut().entry(path.to_path_buf()).or_insert(0) += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn test_os_list_files_sorted_and_skips_dirs() {
        let temp = TempDir::new().unwrap();
        File::create(temp.path().join("b.svg")).unwrap();
        File::create(temp.path().join("a.svg")).unwrap();
        fs::create_dir(temp.path().join("nested")).unwrap();

        let names = OsFileSystem::new().list_files(temp.path()).unwrap();
        assert_eq!(names, vec!["a.svg".to_string(), "b.svg".to_string()]);
    }

    #[test]
    fn test_os_list_missing_dir() {
        let temp = TempDir::new().unwrap();
        let result = OsFileSystem::new().list_files(&temp.path().join("missing"));
        assert!(matches!(result, Err(FsError::NotFound(_))));
    }

    #[test]
    fn test_os_write_replaces_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("icons.jsx");
        let provider = OsFileSystem::new();

        provider.write_file(&path, "first").unwrap();
        provider.write_file(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
        // Only the artifact remains, no stray temporary files
        assert_eq!(provider.list_files(temp.path()).unwrap(), vec!["icons.jsx".to_string()]);
    }

    #[test]
    fn test_os_read_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = OsFileSystem::new().read_file(&temp.path().join("nope.svg"));
        assert!(matches!(result, Err(FsError::NotFound(_))));
    }

    #[test]
    fn test_memory_listing_keeps_insertion_order() {
        let mem = MemoryFileSystem::new();
        mem.add_file("/in/zeta.svg", "");
        mem.add_file("/in/alpha.svg", "");
        mem.add_file("/in/sub/deep.svg", "");

        let names = mem.list_files(Path::new("/in")).unwrap();
        assert_eq!(names, vec!["zeta.svg".to_string(), "alpha.svg".to_string()]);
    }

    #[test]
    fn test_memory_read_only_rejects_write() {
        let mem = MemoryFileSystem::new();
        mem.add_dir("/out");
        mem.set_read_only("/out");

        let result = mem.write_file(Path::new("/out/icons.jsx"), "x");
        assert!(matches!(result, Err(FsError::PermissionDenied(_))));
        assert_eq!(mem.writes("/out/icons.jsx"), 0);
    }

    #[test]
    fn test_memory_write_requires_parent() {
        let mem = MemoryFileSystem::new();
        let result = mem.write_file(Path::new("/missing/icons.jsx"), "x");
        assert!(matches!(result, Err(FsError::NotFound(_))));
    }

    #[test]
    fn test_fs_error_classification() {
        let path = Path::new("/x");
        let err = FsError::from_io(path, io::Error::new(ErrorKind::PermissionDenied, "no"));
        assert!(matches!(err, FsError::PermissionDenied(_)));
        let err = FsError::from_io(path, io::Error::new(ErrorKind::Other, "boom"));
        assert!(err.to_string().contains("boom"));
    }
}
