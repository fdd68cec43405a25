//! Repository traits
//!
//! Async interfaces over the persisted collections. Mutating methods return
//! sentinel values for expected misses (`None`, `false`) and reserve `Err`
//! for persistence failures.

use async_trait::async_trait;

use navagatha_types::{CaseStudy, Job, JobId, JobPatch, NewJob};

use crate::error::StoreResult;

/// Job posting repository
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// All postings in persisted (insertion) order
    async fn list(&self) -> StoreResult<Vec<Job>>;

    /// Find a posting by its slug
    async fn find_by_slug(&self, slug: &str) -> StoreResult<Option<Job>>;

    /// Create a posting; assigns `id` and a collection-unique `slug`
    async fn create(&self, input: NewJob) -> StoreResult<Job>;

    /// Patch a posting by id; `None` if no such record.
    ///
    /// A patched `title` recomputes the slug.
    async fn update(&self, id: &JobId, patch: JobPatch) -> StoreResult<Option<Job>>;

    /// Delete a posting by id; reports whether anything was removed
    async fn delete(&self, id: &JobId) -> StoreResult<bool>;
}

/// Case study repository (read-only collection)
#[async_trait]
pub trait CaseStudyRepository: Send + Sync {
    /// All case studies in persisted order
    async fn list(&self) -> StoreResult<Vec<CaseStudy>>;

    /// Find a case study by its slug
    async fn find_by_slug(&self, slug: &str) -> StoreResult<Option<CaseStudy>>;
}
