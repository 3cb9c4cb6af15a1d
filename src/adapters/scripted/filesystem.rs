//! In-memory adapter for the `FileSystem` port.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::ports::filesystem::FileSystem;

/// Keeps written files in memory so tests can inspect them.
///
/// Clones share the file map, so a test can keep a handle after boxing the
/// adapter into a context.
#[derive(Default, Clone)]
pub struct InMemoryFileSystem {
    files: Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>,
    fail_writes: bool,
}

impl InMemoryFileSystem {
    /// Creates an empty in-memory filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a filesystem whose writes all fail, for error-path tests.
    #[must_use]
    pub fn failing() -> Self {
        Self { files: Arc::new(Mutex::new(HashMap::new())), fail_writes: true }
    }

    /// Returns the contents written to `path`, if any.
    #[must_use]
    pub fn contents(&self, path: &Path) -> Option<Vec<u8>> {
        self.files.lock().expect("file map lock poisoned").get(path).cloned()
    }

    /// Returns the number of files written.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.lock().expect("file map lock poisoned").len()
    }
}

impl FileSystem for InMemoryFileSystem {
    fn write_bytes(
        &self,
        path: &Path,
        contents: &[u8],
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if self.fail_writes {
            return Err(format!("write refused: {}", path.display()).into());
        }
        self.files
            .lock()
            .expect("file map lock poisoned")
            .insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().expect("file map lock poisoned").contains_key(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_and_overwrites_writes() {
        let fs = InMemoryFileSystem::new();
        let path = Path::new("report.docx");

        fs.write_bytes(path, b"one").unwrap();
        fs.write_bytes(path, b"two").unwrap();

        assert!(fs.exists(path));
        assert_eq!(fs.contents(path).unwrap(), b"two");
        assert_eq!(fs.file_count(), 1);
    }

    #[test]
    fn failing_filesystem_rejects_writes() {
        let fs = InMemoryFileSystem::failing();
        let result = fs.write_bytes(Path::new("report.docx"), b"x");
        assert!(result.is_err());
        assert_eq!(fs.file_count(), 0);
    }

    #[test]
    fn clones_share_the_file_map() {
        let fs = InMemoryFileSystem::new();
        let handle = fs.clone();

        handle.write_bytes(Path::new("report.docx"), b"x").unwrap();
        assert!(fs.exists(Path::new("report.docx")));
    }
}
