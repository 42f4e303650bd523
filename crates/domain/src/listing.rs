// crates/domain/src/listing.rs
use std::{fmt::Write as _, ops::Deref};

use log::trace;
use tinyls_shared_kernel::FileInfo;

use crate::options::{Layout, ListingOptions, SortKey};

/// Entries of one directory query, kept in filesystem order until sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryListing {
    entries: Vec<FileInfo>,
}

impl DirectoryListing {
    pub fn new(entries: Vec<FileInfo>) -> Self {
        Self { entries }
    }

    /// Listing holding a single entry, used for file targets.
    pub fn single(entry: FileInfo) -> Self {
        Self::new(vec![entry])
    }

    /// Sorts then renders into `out`.
    pub fn process(&mut self, options: &ListingOptions, out: &mut String) {
        self.sort(options);
        self.render(options, out);
    }

    /// Stable in-place sort. Direction is left to [`render`](Self::render).
    pub fn sort(&mut self, options: &ListingOptions) {
        let key = options.sort_key();
        trace!("sorting {} entries by {key:?}", self.entries.len());
        match key {
            SortKey::Name => self.entries.sort_by_cached_key(|entry| entry.name.folded()),
            SortKey::Size => self.entries.sort_by(|a, b| key.compare(a, b)),
        }
    }

    /// Appends the listing to `out` without a leading or trailing separator.
    pub fn render(&self, options: &ListingOptions, out: &mut String) {
        let layout = options.layout();
        let mut first = true;
        let mut emit = |entry: &FileInfo| {
            if !first {
                out.push_str(layout.separator());
            }
            first = false;
            render_entry(entry, layout, options.human_readable, out);
        };

        if options.reverse {
            self.entries.iter().rev().for_each(&mut emit);
        } else {
            self.entries.iter().for_each(&mut emit);
        }
    }
}

fn render_entry(entry: &FileInfo, layout: Layout, human_readable: bool, out: &mut String) {
    match layout {
        Layout::Simple => out.push_str(entry.name.as_str()),
        Layout::Detailed => {
            // Writing to a String cannot fail.
            let _ = write!(out, "{} {}", entry.name, entry.size.render(human_readable));
        }
    }
}

impl Deref for DirectoryListing {
    type Target = [FileInfo];

    fn deref(&self) -> &Self::Target {
        &self.entries
    }
}

impl From<Vec<FileInfo>> for DirectoryListing {
    fn from(entries: Vec<FileInfo>) -> Self {
        Self::new(entries)
    }
}

impl FromIterator<FileInfo> for DirectoryListing {
    fn from_iter<I: IntoIterator<Item = FileInfo>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
