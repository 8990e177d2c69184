//! Error taxonomy for the full pipeline.
//!
//! Collaborator failures ([`ProviderError`], [`StoreError`]) are opaque
//! message carriers so that trait implementations stay decoupled from any
//! particular transport. The pipeline folds them into [`Error`] at the seam
//! where they occur.

use trailhead_core::SanitizeError;

pub type Result<T> = std::result::Result<T, Error>;

/// Failure reported by a [`TextProvider`](crate::TextProvider)
/// implementation.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct ProviderError {
    message: String,
}

impl ProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Failure reported by a persistence implementation ([`RoadmapStore`] or
/// [`ResumeSource`]).
///
/// [`RoadmapStore`]: crate::RoadmapStore
/// [`ResumeSource`]: crate::ResumeSource
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct StoreError {
    message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Why no roadmap document could be produced from a provider round trip.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GenerationError {
    /// The provider call failed before any text was produced.
    #[error("Provider request failed: {0}")]
    Provider(#[from] ProviderError),
    /// The provider responded, but no usable document could be recovered
    /// from the response.
    #[error(transparent)]
    Sanitize(#[from] SanitizeError),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// No signed-in user identity was supplied.
    #[error("A signed-in user is required")]
    Unauthorized,
    /// The user has no resume content to ground a roadmap in.
    #[error("No resume content is available for this user")]
    MissingInput,
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error("Store operation failed: {0}")]
    Store(#[from] StoreError),
}
