//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`filesystem`]: metadata lookup and directory listing
//!
//! The orchestrator depends on these traits only, so the real filesystem
//! and in-memory doubles are interchangeable.

pub mod filesystem;
