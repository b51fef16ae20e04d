use std::path::Path;

use filekit_domain::{Error, Result};

impl crate::FileKitFS {
    /// Copies the bytes of `from` into `to`, creating or truncating `to`.
    pub fn copy<T: AsRef<Path>, U: AsRef<Path>>(from: T, to: U) -> Result<u64> {
        let (from, to) = (from.as_ref(), to.as_ref());
        std::fs::copy(from, to)
            .map_err(|source| Error::from_io("copy file to", Self::failed_side(from, to), source))
    }

    pub fn rename<T: AsRef<Path>, U: AsRef<Path>>(from: T, to: U) -> Result<()> {
        let (from, to) = (from.as_ref(), to.as_ref());
        std::fs::rename(from, to)
            .map_err(|source| Error::from_io("move file to", Self::failed_side(from, to), source))
    }

    /// The path a failed two-path call is reported against: the source when
    /// it is gone, the destination otherwise.
    fn failed_side<'a>(from: &'a Path, to: &'a Path) -> &'a Path {
        if std::fs::symlink_metadata(from).is_ok() {
            to
        } else {
            from
        }
    }
}
