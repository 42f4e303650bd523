//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: classifies targets and assembles the listing report
//!
//! Use cases depend on the domain and the ports, never on infrastructure.

pub mod orchestrator;

pub use orchestrator::{ClassifiedTargets, ListTargets};
