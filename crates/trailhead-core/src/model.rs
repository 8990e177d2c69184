//! Canonical roadmap document types.
//!
//! A [`RoadmapDocument`] is what the sanitizer guarantees: every field
//! present, every id non-empty and unique within the document. The canonical
//! JSON shape uses the flat field names below; the provider wire shape
//! (`roadmapTitle`, `initialNodes`, nested `data` objects) is accepted on the
//! way in by [`crate::sanitize()`] only.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_TITLE: &str = "Untitled Roadmap";
pub const DEFAULT_DESCRIPTION: &str = "No description provided.";
pub const DEFAULT_DURATION: &str = "Flexible";
pub const DEFAULT_INDUSTRY: &str = "General";
pub const DEFAULT_EDGE_KIND: &str = "smoothstep";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapDocument {
    pub industry: String,
    pub title: String,
    pub description: String,
    /// Expected time investment, free-form ("6 months", "Flexible", ...).
    pub duration: String,
    pub nodes: Vec<NodeSpec>,
    pub edges: Vec<EdgeSpec>,
}

/// A single learning step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSpec {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub level: Level,
}

/// Progression stage of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Level {
    #[default]
    Fundamentals,
    Core,
    Advanced,
    Specialization,
}

impl Level {
    /// Case-insensitive parse; anything unrecognized maps to `Fundamentals`.
    pub fn parse_or_default(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "core" => Level::Core,
            "advanced" => Level::Advanced,
            "specialization" => Level::Specialization,
            _ => Level::Fundamentals,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Fundamentals => "Fundamentals",
            Level::Core => "Core",
            Level::Advanced => "Advanced",
            Level::Specialization => "Specialization",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A prerequisite relation between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub id: String,
    pub source: String,
    pub target: String,
    /// Connector style hint for the render surface.
    #[serde(rename = "type", default = "default_edge_kind")]
    pub kind: String,
    #[serde(default)]
    pub animated: bool,
}

fn default_edge_kind() -> String {
    DEFAULT_EDGE_KIND.to_string()
}
