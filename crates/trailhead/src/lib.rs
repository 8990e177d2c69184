#![forbid(unsafe_code)]

//! `trailhead` turns untrusted career-roadmap text into positioned,
//! renderable graphs.
//!
//! The pipeline has three stages, each usable on its own:
//!
//! 1. [`sanitize()`] recovers a [`RoadmapDocument`] from free-form model
//!    output; the document always satisfies the data-model guarantees.
//! 2. [`build`] links the document into a [`RoadmapGraph`], dropping edges
//!    whose endpoints do not exist.
//! 3. [`layout`](crate::layout::layout) positions the graph with the
//!    [`switchback`] layered layout engine.
//!
//! [`RoadmapService`] wires the stages behind a cache-first generation flow
//! keyed by user identity, and [`InteractionController`] models the
//! selection and presentation rules a render surface needs on top of the
//! positioned graph.

pub use trailhead_core::*;

pub use switchback::{Point, RankDir};

pub mod error;
pub mod generate;
pub mod interaction;
pub mod layout;

pub use error::{Error, GenerationError, ProviderError, Result, StoreError};
pub use generate::{
    GenerateOptions, GenerationCacheEntry, InMemoryStore, ResumeSource, RoadmapService,
    RoadmapStore, TextProvider, UserId, build_prompt,
};
pub use interaction::{
    InteractionController, MOBILE_BREAKPOINT_PX, PresentationMode, ResizeDebouncer,
    SelectionState, ViewportClass,
};
pub use layout::{Bounds, LayoutEdge, LayoutGraph, LayoutNode, layout};
