use std::fs::{DirBuilder, File, OpenOptions};
use std::io::Write;
use std::path::Path;

use filekit_domain::{Error, FileOptions, Result};

impl crate::FileKitFS {
    /// Creates the directory at `path`, along with its missing parents when
    /// `options.create_parents` is set.
    pub fn create_dir<T: AsRef<Path>>(path: T, options: &FileOptions) -> Result<()> {
        let path = path.as_ref();
        let mut builder = DirBuilder::new();
        builder.recursive(options.create_parents);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(options.dir_mode);
        }
        builder
            .create(path)
            .map_err(|source| Error::from_io("create dir", path, source))
    }

    /// Creates an empty file, failing with `AlreadyExists` if anything is
    /// already at `path`.
    pub fn create_new<T: AsRef<Path>>(path: T, options: &FileOptions) -> Result<()> {
        let path = path.as_ref();
        Self::open_options(options)
            .create_new(true)
            .open(path)
            .map(drop)
            .map_err(|source| Error::from_io("create file", path, source))
    }

    /// Writes `contents` to `path`, creating or truncating it.
    pub fn write<T: AsRef<Path>, U: AsRef<[u8]>>(
        path: T,
        contents: U,
        options: &FileOptions,
    ) -> Result<()> {
        let path = path.as_ref();
        let mut file = Self::open_options(options)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|source| Error::from_io("write file", path, source))?;
        file.write_all(contents.as_ref())
            .map_err(|source| Error::from_io("write file", path, source))
    }

    /// Appends `contents` to the existing file at `path`. A missing file is
    /// an error, never created.
    pub fn append<T: AsRef<Path>, U: AsRef<[u8]>>(path: T, contents: U) -> Result<()> {
        let path = path.as_ref();
        let mut file = OpenOptions::new()
            .append(true)
            .open(path)
            .map_err(|source| Error::from_io("open file for append", path, source))?;
        file.write_all(contents.as_ref())
            .map_err(|source| Error::from_io("append to file", path, source))
    }

    pub fn remove_file<T: AsRef<Path>>(path: T) -> Result<()> {
        let path = path.as_ref();
        std::fs::remove_file(path).map_err(|source| Error::from_io("remove file", path, source))
    }

    fn open_options(options: &FileOptions) -> OpenOptions {
        let mut open = File::options();
        open.write(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            open.mode(options.file_mode);
        }
        #[cfg(not(unix))]
        let _ = options;
        open
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use filekit_domain::{Error, FileOptions};
    use pretty_assertions::assert_eq;

    use crate::FileKitFS;

    #[test]
    fn test_create_dir_with_parents() -> Result<()> {
        let dir = tempfile::TempDir::new()?;
        let nested = dir.path().join("a").join("b");

        FileKitFS::create_dir(&nested, &FileOptions::default())?;

        assert!(nested.is_dir());
        Ok(())
    }

    #[test]
    fn test_create_dir_leaf_only() -> Result<()> {
        let dir = tempfile::TempDir::new()?;
        let nested = dir.path().join("a").join("b");
        let options = FileOptions::default().create_parents(false);

        let actual = FileKitFS::create_dir(&nested, &options);

        assert!(matches!(actual, Err(Error::NotFound { .. })));
        assert!(!nested.exists());
        Ok(())
    }

    #[test]
    fn test_create_new_refuses_existing() -> Result<()> {
        let dir = tempfile::TempDir::new()?;
        let file = dir.path().join("fresh.txt");
        let options = FileOptions::default();

        FileKitFS::create_new(&file, &options)?;
        assert_eq!(std::fs::read(&file)?, b"");

        let actual = FileKitFS::create_new(&file, &options);
        let error = match actual {
            Err(error @ Error::AlreadyExists { .. }) => error,
            other => panic!("expected AlreadyExists, got {other:?}"),
        };
        assert_eq!(
            error.io_error().map(std::io::Error::kind),
            Some(std::io::ErrorKind::AlreadyExists)
        );
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_create_new_applies_mode() -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::TempDir::new()?;
        let file = dir.path().join("private.txt");
        let options = FileOptions::default().file_mode(0o600);

        FileKitFS::create_new(&file, &options)?;

        let mode = std::fs::metadata(&file)?.permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);
        Ok(())
    }

    #[test]
    fn test_write_truncates() -> Result<()> {
        let dir = tempfile::TempDir::new()?;
        let file = dir.path().join("notes.txt");
        let options = FileOptions::default();

        FileKitFS::write(&file, "a much longer first line", &options)?;
        FileKitFS::write(&file, "short", &options)?;

        assert_eq!(std::fs::read_to_string(&file)?, "short");
        Ok(())
    }

    #[test]
    fn test_append() -> Result<()> {
        let dir = tempfile::TempDir::new()?;
        let file = dir.path().join("log.txt");
        std::fs::write(&file, "first\n")?;

        FileKitFS::append(&file, "second\n")?;

        assert_eq!(std::fs::read_to_string(&file)?, "first\nsecond\n");
        Ok(())
    }

    #[test]
    fn test_append_never_creates() -> Result<()> {
        let dir = tempfile::TempDir::new()?;
        let file = dir.path().join("absent.txt");

        let actual = FileKitFS::append(&file, "data");

        assert!(matches!(actual, Err(Error::NotFound { .. })));
        assert!(!file.exists());
        Ok(())
    }

    #[test]
    fn test_remove_file() -> Result<()> {
        let dir = tempfile::TempDir::new()?;
        let file = dir.path().join("gone.txt");
        std::fs::write(&file, "x")?;

        FileKitFS::remove_file(&file)?;
        assert!(!file.exists());

        let actual = FileKitFS::remove_file(&file);
        assert!(matches!(actual, Err(Error::NotFound { .. })));
        Ok(())
    }
}
