//! # Domain
//!
//! Listing policy for `tinyls`:
//!
//! - [`options`]: the immutable flag set chosen at the command line
//! - [`listing`]: [`DirectoryListing`], its stable sort and its text rendering
//!
//! Nothing here touches the filesystem; entries arrive already collected.

pub mod listing;
pub mod options;

pub use listing::DirectoryListing;
pub use options::{Layout, ListingOptions, SortKey};
