use derive_setters::Setters;
use serde::{Deserialize, Serialize};

const DEFAULT_DIR_MODE: u32 = 0o755;
const DEFAULT_FILE_MODE: u32 = 0o644;

/// Settings applied whenever a handle creates something on disk.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Setters, PartialEq, Eq)]
#[serde(default)]
pub struct FileOptions {
    /// Permission bits for directories made by `create` (unix only)
    pub dir_mode: u32,

    /// Permission bits for files the handle creates (unix only)
    pub file_mode: u32,

    /// Create missing intermediate directories, not just the leaf
    pub create_parents: bool,
}

impl Default for FileOptions {
    fn default() -> Self {
        Self {
            dir_mode: DEFAULT_DIR_MODE,
            file_mode: DEFAULT_FILE_MODE,
            create_parents: true,
        }
    }
}
