// crates/infra/src/lib.rs
pub mod filesystem;

pub use filesystem::OsFileSystem;
