//! Job posting types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique job posting identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub Uuid);

impl JobId {
    /// Mint a fresh random job ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a job ID from a string
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for JobId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

/// A published job posting.
///
/// The whole collection is persisted as one JSON array; field names below
/// are the on-disk and wire names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Repository-assigned identifier, immutable after creation
    pub id: JobId,
    /// URL-safe identifier derived from `title`
    pub slug: String,
    pub title: String,
    pub department: String,
    pub location: String,
    /// Employment type ("Full-time", "Contract", ...)
    #[serde(rename = "type")]
    pub employment_type: String,
    /// Short summary shown on listing cards
    pub description: String,
    /// Long-form narrative shown on the detail page
    pub overview: String,
    pub responsibilities: Vec<String>,
    pub requirements: Vec<String>,
    pub benefits: Vec<String>,
}

/// Input for creating a job posting; `id` and `slug` are assigned by the
/// repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewJob {
    pub title: String,
    pub department: String,
    pub location: String,
    #[serde(rename = "type")]
    pub employment_type: String,
    pub description: String,
    pub overview: String,
    pub responsibilities: Vec<String>,
    pub requirements: Vec<String>,
    pub benefits: Vec<String>,
}

/// Partial update for a job posting.
///
/// Only the mutable fields are listed; absent fields are left untouched and
/// list fields are replaced wholesale. A new `title` causes the repository
/// to recompute the slug.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JobPatch {
    pub title: Option<String>,
    pub department: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub employment_type: Option<String>,
    pub description: Option<String>,
    pub overview: Option<String>,
    pub responsibilities: Option<Vec<String>>,
    pub requirements: Option<Vec<String>>,
    pub benefits: Option<Vec<String>>,
}

impl JobPatch {
    /// Whether the patch carries no changes at all
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.department.is_none()
            && self.location.is_none()
            && self.employment_type.is_none()
            && self.description.is_none()
            && self.overview.is_none()
            && self.responsibilities.is_none()
            && self.requirements.is_none()
            && self.benefits.is_none()
    }
}

impl Job {
    /// Apply a patch in place.
    ///
    /// `id` and `slug` are never touched here; slug recomputation needs the
    /// rest of the collection and lives in the repository.
    pub fn apply(&mut self, patch: JobPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(department) = patch.department {
            self.department = department;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(employment_type) = patch.employment_type {
            self.employment_type = employment_type;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(overview) = patch.overview {
            self.overview = overview;
        }
        if let Some(responsibilities) = patch.responsibilities {
            self.responsibilities = responsibilities;
        }
        if let Some(requirements) = patch.requirements {
            self.requirements = requirements;
        }
        if let Some(benefits) = patch.benefits {
            self.benefits = benefits;
        }
    }
}
