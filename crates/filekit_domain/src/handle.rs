use std::fmt::Debug;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::{FileExtension, FileIdentity, Result};

/// The operation set every concrete file kind exposes.
///
/// A handle couples a [`FileIdentity`] with an in-memory buffer. The buffer
/// is never synchronized with disk implicitly: it only changes through
/// [`FileHandle::set_data`], [`FileHandle::read`] or a successful write.
/// Filesystem state is re-checked on every call, nothing is cached between
/// operations.
///
/// The trait is object safe so callers can hold a `Box<dyn FileHandle>`
/// without knowing which kind of file is behind it.
pub trait FileHandle: Debug + Send + Sync {
    fn identity(&self) -> &FileIdentity;

    fn identity_mut(&mut self) -> &mut FileIdentity;

    /// The current buffer, `None` while unset.
    fn data(&self) -> Option<&[u8]>;

    /// Replaces the buffer. Never touches disk.
    fn set_data(&mut self, data: Option<Vec<u8>>);

    /// Fails with `NotFound` when the full path is missing and with
    /// `NotRegularFile` when it names anything but a regular file.
    fn check_file(&self) -> Result<()>;

    /// Creates the directory if needed, then the file, then persists the
    /// buffer when one is set. Never overwrites an existing file.
    fn create(&mut self) -> Result<()>;

    /// Replaces the buffer with the full content of the file.
    fn read(&mut self) -> Result<()>;

    /// Writes the buffer to `path`, truncating it. When the handle's own
    /// file does not exist yet it is created first (persisting the buffer)
    /// and the buffer is appended to `path` before the final truncating
    /// write, so on success `path` holds exactly the buffer.
    fn write_replace_to(&mut self, path: &Path) -> Result<()>;

    /// Appends the buffer and a newline to the existing file at `path`.
    fn write_append_to(&self, path: &Path) -> Result<()>;

    fn delete(&self) -> Result<()>;

    /// Copies the file's bytes to `path`, creating or truncating it.
    fn copy(&self, path: &Path) -> Result<()>;

    /// Renames the file to the full path of `target`.
    fn move_to(&self, target: &FileIdentity) -> Result<()>;

    /// A new, independent handle with the same identity and buffer.
    fn clone_box(&self) -> Box<dyn FileHandle>;

    fn write_replace(&mut self) -> Result<()> {
        let path = self.full_path_buf();
        self.write_replace_to(&path)
    }

    fn write_append(&self) -> Result<()> {
        self.write_append_to(&self.full_path_buf())
    }

    /// Renders the buffer as text followed by a newline.
    fn print_to(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", String::from_utf8_lossy(self.data().unwrap_or_default()))
    }

    /// Prints the buffer to stdout.
    fn print(&self) {
        let _ = self.print_to(&mut io::stdout().lock());
    }

    fn name(&self) -> &str {
        self.identity().name()
    }

    /// The directory prefix of the full path.
    fn directory(&self) -> &str {
        self.identity().directory()
    }

    fn extension(&self) -> FileExtension {
        self.identity().extension()
    }

    fn full_path(&self) -> String {
        self.identity().full_path()
    }

    fn full_path_buf(&self) -> PathBuf {
        self.identity().full_path_buf()
    }

    fn set_name(&mut self, name: String) {
        self.identity_mut().set_name(name)
    }

    fn set_directory(&mut self, directory: String) {
        self.identity_mut().set_directory(directory)
    }

    fn set_extension(&mut self, extension: FileExtension) {
        self.identity_mut().set_extension(extension)
    }
}

impl Clone for Box<dyn FileHandle> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
