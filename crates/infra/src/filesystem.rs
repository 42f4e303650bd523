// crates/infra/src/filesystem.rs
use std::{
    fs::{self, Metadata},
    path::Path,
};

use log::debug;
use tinyls_domain::DirectoryListing;
use tinyls_ports::filesystem::FileSystem;
use tinyls_shared_kernel::{FileInfo, InfrastructureError, Result};

/// Filesystem adapter backed by `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl OsFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for OsFileSystem {
    fn stat(&self, path: &Path) -> Result<FileInfo> {
        let metadata = fs::metadata(path).map_err(|source| InfrastructureError::Stat {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("stat {}: {} bytes", path.display(), metadata.len());
        Ok(to_file_info(display_name(path), &metadata))
    }

    fn read_dir(&self, path: &Path) -> Result<DirectoryListing> {
        let read_dir_err =
            |source: std::io::Error| InfrastructureError::ReadDir { path: path.to_path_buf(), source };

        let mut entries = Vec::new();
        for entry in fs::read_dir(path).map_err(read_dir_err)? {
            let entry = entry.map_err(read_dir_err)?;
            // Entry metadata does not follow symlinks.
            let metadata = entry.metadata().map_err(|source| InfrastructureError::Stat {
                path: entry.path(),
                source,
            })?;
            let name = entry.file_name().to_string_lossy().into_owned();
            entries.push(to_file_info(name, &metadata));
        }

        // `fs::read_dir` order is platform dependent; fix it by raw name so
        // ties in the listing sort resolve the same way everywhere.
        entries.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        debug!("read_dir {}: {} entries", path.display(), entries.len());
        Ok(entries.into())
    }
}

fn to_file_info(name: String, metadata: &Metadata) -> FileInfo {
    FileInfo::new(name, metadata.len(), metadata.is_dir())
}

/// Final component of the target as given: `./` shows as `.`, `/` as `/`.
fn display_name(path: &Path) -> String {
    path.components()
        .next_back()
        .map(|component| component.as_os_str().to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
