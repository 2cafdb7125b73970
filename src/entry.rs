use serde::Deserialize;
use std::{fmt, fs, path::Path};

/// The kind of entry a caller wants at a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum EntryKind {
    File,
    Directory,
}
impl EntryKind {
    fn as_str(&self) -> &str {
        match self {
            Self::File => "file",
            Self::Directory => "directory",
        }
    }

    /// Reports the kind of the entry currently at `path`, or `None` when
    /// nothing is there.
    ///
    /// Anything that is not a directory counts as a file. The probe follows
    /// symlinks, and a failed probe reads as a missing entry.
    pub fn of(path: &Path) -> Option<Self> {
        match fs::metadata(path) {
            Ok(metadata) if metadata.is_dir() => Some(Self::Directory),
            Ok(_) => Some(Self::File),
            Err(_) => None,
        }
    }
}
impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
