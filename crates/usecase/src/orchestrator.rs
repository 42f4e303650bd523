use std::path::{Path, PathBuf};

use log::debug;
use tinyls_domain::{DirectoryListing, ListingOptions};
use tinyls_ports::filesystem::FileSystem;
use tinyls_shared_kernel::{FileInfo, Result};

/// Targets split into plain files and directories, each in input order.
#[derive(Debug, Default)]
pub struct ClassifiedTargets {
    pub files: Vec<FileInfo>,
    pub dirs: Vec<PathBuf>,
}

impl ClassifiedTargets {
    /// Section headers are only printed when more than one directory is listed.
    pub fn needs_headers(&self) -> bool {
        self.dirs.len() > 1
    }
}

pub struct ListTargets<'a> {
    filesystem: &'a dyn FileSystem,
    options: ListingOptions,
}

impl<'a> ListTargets<'a> {
    pub fn new(filesystem: &'a dyn FileSystem, options: ListingOptions) -> Self {
        Self { filesystem, options }
    }

    /// Builds the whole report: file targets first, then directory sections.
    /// The first filesystem error aborts the run.
    pub fn run<P: AsRef<Path>>(&self, targets: &[P]) -> Result<String> {
        let classified = self.classify(targets)?;
        let headers = classified.needs_headers();
        let mut report = String::new();

        for file in classified.files {
            DirectoryListing::single(file).process(&self.options, &mut report);
        }

        for dir in &classified.dirs {
            if headers {
                report.push_str(&section_header(dir));
            }
            let mut listing = self.filesystem.read_dir(dir)?;
            debug!("{}: {} entries", dir.display(), listing.len());
            listing.process(&self.options, &mut report);
        }

        Ok(report)
    }

    /// Stats every target once, preserving input order within each group.
    pub fn classify<P: AsRef<Path>>(&self, targets: &[P]) -> Result<ClassifiedTargets> {
        let mut classified = ClassifiedTargets::default();
        for target in targets {
            let path = target.as_ref();
            let info = self.filesystem.stat(path)?;
            debug!("{}: is_dir={}", path.display(), info.is_dir);
            if info.is_dir {
                classified.dirs.push(path.to_path_buf());
            } else {
                classified.files.push(info);
            }
        }
        Ok(classified)
    }
}

fn section_header(dir: &Path) -> String {
    format!("\n\n{}:\n\n", dir.display())
}
