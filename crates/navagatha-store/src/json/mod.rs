//! JSON-document repository implementations
//!
//! The whole collection is the unit of storage. Writes land in a sibling
//! temp file that is renamed over the document, so a failed write leaves the
//! previous document intact and a mutation is only observable once the
//! rename succeeds.

mod case_studies;
mod jobs;

pub use case_studies::JsonCaseStudyRepository;
pub use jobs::JsonJobRepository;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

use crate::error::StoreResult;

/// Read and deserialize a whole collection document
pub(crate) async fn read_document<T: DeserializeOwned>(path: &Path) -> StoreResult<Vec<T>> {
    let bytes = tokio::fs::read(path).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Serialize and rewrite a whole collection document via temp-file rename
pub(crate) async fn write_document<T: Serialize>(path: &Path, records: &[T]) -> StoreResult<()> {
    let bytes = serde_json::to_vec_pretty(records)?;
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = std::path::PathBuf::from(tmp);
    tokio::fs::write(&tmp, &bytes).await?;
    tokio::fs::rename(&tmp, path).await?;
    Ok(())
}
