#![forbid(unsafe_code)]

//! Roadmap document model, response sanitizer and graph builder (headless).
//!
//! Design goals:
//! - provider output is untrusted: recoverable defects are repaired with
//!   deterministic defaults, the rest fail with typed errors
//! - deterministic, testable outputs (same input, same document, same graph)
//! - no I/O: generation and persistence live behind seams in `trailhead`

pub mod error;
pub mod graph;
pub mod model;
pub mod sanitize;

pub use error::{Result, SanitizeError};
pub use graph::{RoadmapGraph, build};
pub use model::{EdgeSpec, Level, NodeSpec, RoadmapDocument};
pub use sanitize::sanitize;
