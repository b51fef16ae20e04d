use std::path::Path;

use filekit_domain::{Error, Result};

impl crate::FileKitFS {
    /// Whether anything exists at `path`. Errors other than "not found"
    /// (permission denied on a parent, for instance) are surfaced.
    pub fn exists<T: AsRef<Path>>(path: T) -> Result<bool> {
        let path = path.as_ref();
        path.try_exists()
            .map_err(|source| Error::from_io("stat", path, source))
    }

    /// Fails unless `path` names a regular file. Symlinks are not followed,
    /// so a link counts as not regular.
    pub fn check_regular_file<T: AsRef<Path>>(path: T) -> Result<()> {
        let path = path.as_ref();
        let metadata = std::fs::symlink_metadata(path)
            .map_err(|source| Error::from_io("stat", path, source))?;

        if !metadata.file_type().is_file() {
            return Err(Error::NotRegularFile { path: path.to_path_buf() });
        }

        Ok(())
    }
}
