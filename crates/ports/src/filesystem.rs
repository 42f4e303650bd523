// crates/ports/src/filesystem.rs
use std::path::Path;

use tinyls_domain::DirectoryListing;
use tinyls_shared_kernel::{FileInfo, Result};

/// Port for querying the filesystem.
///
/// Both calls block. A missing or unreadable path is reported as an error;
/// callers decide whether that aborts the whole report.
pub trait FileSystem {
    /// Metadata for exactly one path.
    fn stat(&self, path: &Path) -> Result<FileInfo>;

    /// Immediate children of `path`, in the order the adapter returns them.
    /// An empty directory gives an empty listing.
    fn read_dir(&self, path: &Path) -> Result<DirectoryListing>;
}

