//! Navagatha Store - persistence for the portal collections
//!
//! Each collection is one JSON array-of-records document on disk; every
//! mutation reads the whole document, applies the change in memory, and
//! rewrites it. Repository traits keep callers independent of that layout.
//!
//! # Example
//!
//! ```rust,ignore
//! use navagatha_store::{JobRepository, JsonJobRepository};
//!
//! let jobs = JsonJobRepository::new("data/jobs.json");
//! let all = jobs.list().await?;
//! ```

pub mod error;
pub mod json;
pub mod repo;

pub use error::{StoreError, StoreResult};
pub use json::{JsonCaseStudyRepository, JsonJobRepository};
pub use repo::{CaseStudyRepository, JobRepository};
