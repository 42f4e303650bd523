// crates/domain/src/options.rs
use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tinyls_shared_kernel::FileInfo;

/// Flags controlling how a listing is ordered and printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct ListingOptions {
    /// Print `name size` lines instead of a single row of names.
    pub show_details: bool,
    /// Order by size (largest first) instead of by name.
    pub sort_by_size: bool,
    /// Scale sizes to K/M/G/T.
    pub human_readable: bool,
    /// Walk the sorted listing from last to first when rendering.
    pub reverse: bool,
}

impl ListingOptions {
    pub fn sort_key(&self) -> SortKey {
        if self.sort_by_size { SortKey::Size } else { SortKey::Name }
    }

    pub fn layout(&self) -> Layout {
        if self.show_details { Layout::Detailed } else { Layout::Simple }
    }
}

/// Sorting keys available for ordering a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Case-insensitive name, ascending.
    Name,
    /// Byte size, descending.
    Size,
}

impl SortKey {
    /// Comparator used with a stable sort; equal keys keep their input order.
    pub fn compare(self, a: &FileInfo, b: &FileInfo) -> Ordering {
        match self {
            Self::Name => a.name.folded().cmp(&b.name.folded()),
            Self::Size => b.size.cmp(&a.size),
        }
    }
}

/// How each entry is laid out in the rendered fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Names on one row, separated by four spaces.
    Simple,
    /// One `name size` entry per line.
    Detailed,
}

impl Layout {
    /// Text written before every entry except the first one rendered.
    pub fn separator(self) -> &'static str {
        match self {
            Self::Simple => "    ",
            Self::Detailed => "\n",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_sort_by_name_in_simple_layout() {
        let options = ListingOptions::default();
        assert_eq!(options.sort_key(), SortKey::Name);
        assert_eq!(options.layout(), Layout::Simple);
    }

    #[test]
    fn flags_select_size_key_and_detailed_layout() {
        let options = ListingOptions { show_details: true, sort_by_size: true, ..Default::default() };
        assert_eq!(options.sort_key(), SortKey::Size);
        assert_eq!(options.layout(), Layout::Detailed);
    }

    #[test]
    fn name_comparison_ignores_case() {
        let upper = FileInfo::file("MyFile2", 0);
        let lower = FileInfo::file("myfile2", 0);
        assert_eq!(SortKey::Name.compare(&upper, &lower), Ordering::Equal);
        assert_eq!(
            SortKey::Name.compare(&FileInfo::file("myFile1", 0), &upper),
            Ordering::Less
        );
    }

    #[test]
    fn size_comparison_puts_largest_first() {
        let big = FileInfo::file("a", 3);
        let small = FileInfo::file("b", 1);
        assert_eq!(SortKey::Size.compare(&big, &small), Ordering::Less);
        assert_eq!(SortKey::Size.compare(&small, &big), Ordering::Greater);
    }

    #[test]
    fn options_json_roundtrip() {
        let options = ListingOptions { show_details: true, reverse: true, ..Default::default() };
        let json = serde_json::to_string(&options).expect("serializes");
        assert!(json.contains("\"show_details\":true"));
        let decoded: ListingOptions = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(decoded, options);
    }
}
