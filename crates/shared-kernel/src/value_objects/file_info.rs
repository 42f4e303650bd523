// crates/shared-kernel/src/value_objects/file_info.rs
use std::fmt;

use serde::{Deserialize, Serialize};

use super::FileSize;

/// Entry name as reported by the filesystem; non UTF-8 segments are lossy converted by adapters.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct FileName(String);

impl FileName {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercased form used for case-insensitive ordering. Never displayed.
    #[must_use]
    pub fn folded(&self) -> String {
        self.0.to_lowercase()
    }
}

impl From<String> for FileName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<&str> for FileName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl AsRef<str> for FileName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Snapshot of a single filesystem entry captured at query time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileInfo {
    pub name: FileName,
    pub size: FileSize,
    pub is_dir: bool,
}

impl FileInfo {
    pub fn new(name: impl Into<FileName>, size: impl Into<FileSize>, is_dir: bool) -> Self {
        Self { name: name.into(), size: size.into(), is_dir }
    }

    pub fn file(name: impl Into<FileName>, size: u64) -> Self {
        Self::new(name, size, false)
    }

    pub fn dir(name: impl Into<FileName>) -> Self {
        Self::new(name, 0, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folded_name_keeps_display_casing() {
        let name = FileName::from("MyFile2");
        assert_eq!(name.folded(), "myfile2");
        assert_eq!(name.to_string(), "MyFile2");
    }

    #[test]
    fn constructors_set_directory_flag() {
        assert!(!FileInfo::file("a", 3).is_dir);
        assert!(FileInfo::dir("d").is_dir);
        assert_eq!(FileInfo::file("a", 3).size.bytes(), 3);
    }
}
