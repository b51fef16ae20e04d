use std::path::Path;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// The closed set of recognized file kinds, each rendered as the literal
/// suffix appended to a file's name on disk.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    AsRefStr,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FileExtension {
    #[default]
    #[strum(serialize = ".txt")]
    Txt,
    #[strum(serialize = ".csv")]
    Csv,
    #[strum(serialize = ".xlsx")]
    Excel,
    #[strum(serialize = ".xls")]
    ExcelLegacy,
    #[strum(serialize = ".json")]
    Json,
    #[strum(serialize = ".graphql")]
    Graphql,
    #[strum(serialize = ".sql")]
    Sql,
    #[strum(serialize = ".xml")]
    Xml,
    #[strum(serialize = ".zip")]
    Zip,
}

impl FileExtension {
    /// The on-disk suffix, leading dot included.
    pub fn suffix(self) -> &'static str {
        self.into()
    }

    /// Looks up the tag for an exact suffix such as `".csv"`.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        suffix.parse().ok()
    }

    /// Resolves the tag from the last extension of `path`, if recognized.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let extension = path.as_ref().extension()?.to_str()?;
        Self::from_suffix(&format!(".{extension}"))
    }

    pub fn variants() -> Vec<FileExtension> {
        Self::iter().collect()
    }
}
