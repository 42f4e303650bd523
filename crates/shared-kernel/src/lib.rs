// crates/shared-kernel/src/lib.rs
pub use error::{InfrastructureError, Result, TinylsError};

pub mod error;
pub mod value_objects;

pub use value_objects::{FileInfo, FileName, FileSize};
