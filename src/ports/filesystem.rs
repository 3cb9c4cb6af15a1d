//! Filesystem port for persisting the report artifact.

use std::path::Path;

/// Writes report bytes to disk.
///
/// Abstracting the filesystem lets tests observe exactly what was written
/// (and that nothing was written) without touching the real disk.
pub trait FileSystem: Send + Sync {
    /// Writes the given bytes to a file, creating or fully overwriting it.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails (permissions, disk full, etc.).
    fn write_bytes(
        &self,
        path: &Path,
        contents: &[u8],
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Returns `true` if the path exists.
    fn exists(&self, path: &Path) -> bool;
}
