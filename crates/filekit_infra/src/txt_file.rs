use std::path::Path;

use filekit_domain::{Error, FileExtension, FileHandle, FileIdentity, FileOptions, Result};
use filekit_fs::FileKitFS;
use tracing::debug;

/// A plain text file held entirely in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxtFile {
    identity: FileIdentity,
    data: Option<Vec<u8>>,
    options: FileOptions,
}

impl TxtFile {
    /// Creates a handle with an unset buffer. Nothing is touched on disk.
    pub fn new(
        name: impl Into<String>,
        directory: impl Into<String>,
        extension: FileExtension,
    ) -> Self {
        Self::from_identity(FileIdentity::new(name, directory, extension))
    }

    pub fn from_identity(identity: FileIdentity) -> Self {
        Self { identity, data: None, options: FileOptions::default() }
    }

    pub fn with_options(mut self, options: FileOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &FileOptions {
        &self.options
    }

    /// The buffer decoded as UTF-8, invalid sequences replaced.
    pub fn text(&self) -> Option<String> {
        self.data
            .as_deref()
            .map(|bytes| String::from_utf8_lossy(bytes).to_string())
    }

    fn buffer(&self) -> &[u8] {
        self.data.as_deref().unwrap_or_default()
    }
}

impl FileHandle for TxtFile {
    fn identity(&self) -> &FileIdentity {
        &self.identity
    }

    fn identity_mut(&mut self) -> &mut FileIdentity {
        &mut self.identity
    }

    fn data(&self) -> Option<&[u8]> {
        self.data.as_deref()
    }

    fn set_data(&mut self, data: Option<Vec<u8>>) {
        self.data = data;
    }

    fn check_file(&self) -> Result<()> {
        FileKitFS::check_regular_file(self.full_path_buf())
    }

    fn create(&mut self) -> Result<()> {
        let full_path = self.full_path_buf();
        let directory = self.identity.directory_path().to_path_buf();
        debug!(path = %full_path.display(), "Creating file");

        if !FileKitFS::exists(&directory)? {
            FileKitFS::create_dir(&directory, &self.options)?;
        } else if FileKitFS::exists(&full_path)? {
            return Err(Error::AlreadyExists { path: full_path, source: None });
        }

        FileKitFS::create_new(&full_path, &self.options)?;
        if self.data.is_some() {
            self.write_replace()?;
        }
        Ok(())
    }

    fn read(&mut self) -> Result<()> {
        self.check_file()?;
        let full_path = self.full_path_buf();
        debug!(path = %full_path.display(), "Reading file");
        self.data = Some(FileKitFS::read(&full_path)?);
        Ok(())
    }

    fn write_replace_to(&mut self, path: &Path) -> Result<()> {
        match self.check_file() {
            Ok(()) => {}
            Err(Error::NotFound { .. }) => {
                self.create()?;
                self.write_append_to(path)?;
            }
            Err(error) => return Err(error),
        }

        debug!(path = %path.display(), bytes = self.buffer().len(), "Replacing file content");
        FileKitFS::write(path, self.buffer(), &self.options)
    }

    fn write_append_to(&self, path: &Path) -> Result<()> {
        self.check_file()?;
        debug!(path = %path.display(), bytes = self.buffer().len(), "Appending to file");

        let mut line = Vec::with_capacity(self.buffer().len() + 1);
        line.extend_from_slice(self.buffer());
        line.push(b'\n');
        FileKitFS::append(path, line)
    }

    fn delete(&self) -> Result<()> {
        self.check_file()?;
        let full_path = self.full_path_buf();
        debug!(path = %full_path.display(), "Deleting file");
        FileKitFS::remove_file(full_path)
    }

    fn copy(&self, path: &Path) -> Result<()> {
        self.check_file()?;
        let full_path = self.full_path_buf();
        debug!(from = %full_path.display(), to = %path.display(), "Copying file");
        FileKitFS::copy(full_path, path).map(drop)
    }

    fn move_to(&self, target: &FileIdentity) -> Result<()> {
        self.check_file()?;
        let full_path = self.full_path_buf();
        let target_path = target.full_path_buf();
        debug!(from = %full_path.display(), to = %target_path.display(), "Moving file");
        FileKitFS::rename(full_path, target_path)
    }

    fn clone_box(&self) -> Box<dyn FileHandle> {
        Box::new(self.clone())
    }
}
