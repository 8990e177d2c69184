//! Cache-first roadmap generation.
//!
//! [`RoadmapService`] owns the flow: authorize, load the resume, consult the
//! store, and only then pay for a provider round trip. Provider output goes
//! through [`sanitize()`] before anything is persisted, so stores only ever see
//! documents that already satisfy the data-model guarantees.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use trailhead_core::{RoadmapDocument, sanitize};
use uuid::Uuid;

use crate::error::{Error, GenerationError, ProviderError, Result, StoreError};

/// Opaque user identifier issued by the embedding application's auth layer.
pub type UserId = String;

/// One persisted generation result.
///
/// Entries are immutable once written. Regeneration appends a new entry
/// rather than editing an old one, so a concurrent reader never observes a
/// half-replaced roadmap.
#[derive(Debug, Clone)]
pub struct GenerationCacheEntry {
    pub id: Uuid,
    pub user: UserId,
    pub document: RoadmapDocument,
    pub created_at: DateTime<Utc>,
}

/// Produces free-form text from a prompt.
///
/// Implementations typically wrap an LLM client; tests use canned strings.
/// The pipeline never inspects the text beyond handing it to
/// [`sanitize()`], so providers are free to wrap the JSON payload in prose or
/// code fences.
#[async_trait]
pub trait TextProvider: Send + Sync {
    async fn generate(&self, prompt: &str) -> std::result::Result<String, ProviderError>;
}

/// Looks up the resume text a user's roadmap should be grounded in.
#[async_trait]
pub trait ResumeSource: Send + Sync {
    /// Returns `None` when the user has no resume on file.
    async fn resume_content(&self, user: &str) -> std::result::Result<Option<String>, StoreError>;
}

/// Persistence for generated roadmaps.
#[async_trait]
pub trait RoadmapStore: Send + Sync {
    /// Returns the most recently created entry for `user`, if any.
    async fn find_latest(
        &self,
        user: &str,
    ) -> std::result::Result<Option<GenerationCacheEntry>, StoreError>;

    /// Appends a new entry for `user` and returns it.
    async fn create(
        &self,
        user: &str,
        document: &RoadmapDocument,
    ) -> std::result::Result<GenerationCacheEntry, StoreError>;
}

/// Append-only, process-local [`RoadmapStore`].
///
/// Entries for a user are held in creation order, so the last one is the
/// newest. Useful for tests and single-process embedders; anything
/// multi-process wants a real database behind the trait instead.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: Mutex<HashMap<UserId, Vec<GenerationCacheEntry>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries stored for `user`.
    pub fn entry_count(&self, user: &str) -> usize {
        self.entries.lock().unwrap().get(user).map_or(0, Vec::len)
    }
}

#[async_trait]
impl RoadmapStore for InMemoryStore {
    async fn find_latest(
        &self,
        user: &str,
    ) -> std::result::Result<Option<GenerationCacheEntry>, StoreError> {
        let entries = self.entries.lock().unwrap();
        Ok(entries.get(user).and_then(|all| all.last()).cloned())
    }

    async fn create(
        &self,
        user: &str,
        document: &RoadmapDocument,
    ) -> std::result::Result<GenerationCacheEntry, StoreError> {
        let entry = GenerationCacheEntry {
            id: Uuid::new_v4(),
            user: user.to_string(),
            document: document.clone(),
            created_at: Utc::now(),
        };
        let mut entries = self.entries.lock().unwrap();
        entries
            .entry(entry.user.clone())
            .or_default()
            .push(entry.clone());
        Ok(entry)
    }
}

/// Cache behavior for [`RoadmapService::get_or_generate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Skip the cache read and always ask the provider for a fresh document.
    /// The fresh document is still persisted.
    pub force_regenerate: bool,
}

impl GenerateOptions {
    /// Serve from the cache when a previous generation exists.
    pub fn cached() -> Self {
        Self::default()
    }

    /// Always regenerate, appending a new cache entry.
    pub fn fresh() -> Self {
        Self {
            force_regenerate: true,
        }
    }
}

/// Builds the provider prompt for a resume.
///
/// The prompt pins the output contract: a single JSON object shaped like the
/// wire form of [`RoadmapDocument`], with 20-25 nodes stepping through the
/// four levels. [`sanitize()`] accepts that shape directly, so a well-behaved
/// provider response needs no further negotiation.
pub fn build_prompt(resume: &str) -> String {
    format!(
        r#"You are an expert career mentor and curriculum designer.

Analyze the following resume and infer the most likely career field/industry
(e.g., Software Development, Medicine, Civil Engineering, Teaching, Law, Business, etc.).

Resume:
{resume}

Now generate a career learning and growth roadmap SPECIFICALLY for this field.

Guidelines:
- First, identify the industry from the resume (doctor, teacher, civil engineer, web developer, etc.).
- Then create a roadmap with 20-25 nodes that reflect realistic skills, milestones, or knowledge progression in that industry.
- The roadmap must follow a progression: Fundamentals -> Core -> Advanced -> Specialization.
- Nodes format:
  {{"id", "data": {{"title", "description", "link", "level"}}}}
- Edges format:
  {{"id", "source", "target", "type": "smoothstep"}}

Output ONLY valid JSON with the following structure:
{{
  "industry": "Inferred industry from resume",
  "roadmapTitle": "Custom roadmap title",
  "description": "Brief description of roadmap",
  "duration": "Suggested time frame",
  "initialNodes": [...],
  "initialEdges": [...]
}}"#
    )
}

/// Cache-first roadmap generation pipeline.
pub struct RoadmapService {
    provider: Arc<dyn TextProvider>,
    resumes: Arc<dyn ResumeSource>,
    store: Arc<dyn RoadmapStore>,
}

impl RoadmapService {
    pub fn new(
        provider: Arc<dyn TextProvider>,
        resumes: Arc<dyn ResumeSource>,
        store: Arc<dyn RoadmapStore>,
    ) -> Self {
        Self {
            provider,
            resumes,
            store,
        }
    }

    /// Returns the user's roadmap, generating and persisting one if needed.
    ///
    /// `identity` is `None` when no user is signed in; that is
    /// [`Error::Unauthorized`] regardless of cache state. A user without
    /// resume content is [`Error::MissingInput`], again before the cache is
    /// consulted, so a stale cache entry never masks a deleted resume.
    ///
    /// Failures on the provider or sanitize path leave the store untouched.
    pub async fn get_or_generate(
        &self,
        identity: Option<&str>,
        options: GenerateOptions,
    ) -> Result<RoadmapDocument> {
        let user = identity.ok_or(Error::Unauthorized)?;
        let resume = self
            .resumes
            .resume_content(user)
            .await?
            .ok_or(Error::MissingInput)?;

        if !options.force_regenerate {
            if let Some(entry) = self.store.find_latest(user).await? {
                tracing::debug!("Serving cached roadmap {} for user {}", entry.id, user);
                return Ok(entry.document);
            }
        }

        let prompt = build_prompt(&resume);
        let raw = self
            .provider
            .generate(&prompt)
            .await
            .map_err(GenerationError::Provider)?;
        let document = sanitize(&raw).map_err(GenerationError::Sanitize)?;
        let entry = self.store.create(user, &document).await?;
        tracing::info!(
            "Generated roadmap {} ({} nodes) for user {}",
            entry.id,
            entry.document.nodes.len(),
            user
        );
        Ok(entry.document)
    }
}
