use std::path::Path;

use filekit_domain::{Error, Result};

impl crate::FileKitFS {
    pub fn read<T: AsRef<Path>>(path: T) -> Result<Vec<u8>> {
        let path = path.as_ref();
        std::fs::read(path).map_err(|source| Error::from_io("read file", path, source))
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use filekit_domain::Error;
    use pretty_assertions::assert_eq;

    use crate::FileKitFS;

    #[test]
    fn test_read() -> Result<()> {
        let dir = tempfile::TempDir::new()?;
        let file = dir.path().join("notes.txt");
        std::fs::write(&file, "Hello 世界")?;

        assert_eq!(FileKitFS::read(&file)?, "Hello 世界".as_bytes());
        Ok(())
    }

    #[test]
    fn test_read_missing_file() -> Result<()> {
        let dir = tempfile::TempDir::new()?;
        let actual = FileKitFS::read(dir.path().join("absent.txt"));
        assert!(matches!(actual, Err(Error::NotFound { .. })));
        Ok(())
    }
}
