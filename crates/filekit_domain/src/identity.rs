use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::FileExtension;

/// Name, directory and extension of a logical file.
///
/// The full path is always `directory + name + suffix`, concatenated as
/// plain strings. No separator is inserted, so `directory` must carry its
/// own trailing separator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileIdentity {
    name: String,
    directory: String,
    extension: FileExtension,
}

impl FileIdentity {
    pub fn new(
        name: impl Into<String>,
        directory: impl Into<String>,
        extension: FileExtension,
    ) -> Self {
        Self {
            name: name.into(),
            directory: directory.into(),
            extension,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn directory(&self) -> &str {
        &self.directory
    }

    pub fn extension(&self) -> FileExtension {
        self.extension
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_directory(&mut self, directory: impl Into<String>) {
        self.directory = directory.into();
    }

    pub fn set_extension(&mut self, extension: FileExtension) {
        self.extension = extension;
    }

    pub fn full_path(&self) -> String {
        format!("{}{}{}", self.directory, self.name, self.extension.suffix())
    }

    /// The directory as a host path. An empty directory names the current
    /// working directory, which is where the bare `name + suffix` resolves.
    pub fn directory_path(&self) -> &Path {
        if self.directory.is_empty() {
            Path::new(".")
        } else {
            Path::new(&self.directory)
        }
    }

    pub fn full_path_buf(&self) -> PathBuf {
        PathBuf::from(self.full_path())
    }
}

impl Display for FileIdentity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.full_path())
    }
}
