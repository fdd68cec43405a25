//! JSON-file job repository

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::sync::Mutex;

use navagatha_types::{slugify, Job, JobId, JobPatch, NewJob};

use crate::error::StoreResult;
use crate::json::{read_document, write_document};
use crate::repo::JobRepository;

/// Job repository over one JSON array document.
///
/// Every mutation is a read-modify-rewrite of the whole document. The write
/// lock is held across the full read-modify-write, so concurrent mutations
/// serialize instead of clobbering each other's changes; plain reads go
/// straight to the document.
pub struct JsonJobRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonJobRepository {
    /// Create a repository over the document at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }
}

/// Pick a slug not taken by any other record, suffixing `-2`, `-3`, ... on
/// collision. `exclude` skips the record being updated.
fn unique_slug(jobs: &[Job], base: &str, exclude: Option<&JobId>) -> String {
    let taken = |candidate: &str| {
        jobs.iter()
            .any(|j| j.slug == candidate && exclude != Some(&j.id))
    };
    if !taken(base) {
        return base.to_string();
    }
    let mut n = 2;
    loop {
        let candidate = format!("{base}-{n}");
        if !taken(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

#[async_trait]
impl JobRepository for JsonJobRepository {
    async fn list(&self) -> StoreResult<Vec<Job>> {
        read_document(&self.path).await
    }

    async fn find_by_slug(&self, slug: &str) -> StoreResult<Option<Job>> {
        Ok(self.list().await?.into_iter().find(|j| j.slug == slug))
    }

    async fn create(&self, input: NewJob) -> StoreResult<Job> {
        let _guard = self.write_lock.lock().await;
        let mut jobs: Vec<Job> = read_document(&self.path).await?;

        let job = Job {
            id: JobId::new(),
            slug: unique_slug(&jobs, &slugify(&input.title), None),
            title: input.title,
            department: input.department,
            location: input.location,
            employment_type: input.employment_type,
            description: input.description,
            overview: input.overview,
            responsibilities: input.responsibilities,
            requirements: input.requirements,
            benefits: input.benefits,
        };

        jobs.push(job.clone());
        write_document(&self.path, &jobs).await?;
        tracing::debug!(id = %job.id, slug = %job.slug, "created job posting");
        Ok(job)
    }

    async fn update(&self, id: &JobId, patch: JobPatch) -> StoreResult<Option<Job>> {
        let _guard = self.write_lock.lock().await;
        let mut jobs: Vec<Job> = read_document(&self.path).await?;

        let Some(index) = jobs.iter().position(|j| j.id == *id) else {
            return Ok(None);
        };

        let title_changed = patch.title.is_some();
        let mut job = jobs[index].clone();
        job.apply(patch);
        if title_changed {
            job.slug = unique_slug(&jobs, &slugify(&job.title), Some(id));
        }

        jobs[index] = job.clone();
        write_document(&self.path, &jobs).await?;
        Ok(Some(job))
    }

    async fn delete(&self, id: &JobId) -> StoreResult<bool> {
        let _guard = self.write_lock.lock().await;
        let mut jobs: Vec<Job> = read_document(&self.path).await?;

        let before = jobs.len();
        jobs.retain(|j| j.id != *id);
        if jobs.len() == before {
            return Ok(false);
        }

        write_document(&self.path, &jobs).await?;
        Ok(true)
    }
}
