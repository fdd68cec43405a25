//! JSON-file case study repository (read-only)

use async_trait::async_trait;
use std::path::PathBuf;

use navagatha_types::CaseStudy;

use crate::error::StoreResult;
use crate::json::read_document;
use crate::repo::CaseStudyRepository;

/// Read-only repository over the case-studies document. Records are
/// authored directly in the file; there is no mutation path and therefore no
/// write lock.
pub struct JsonCaseStudyRepository {
    path: PathBuf,
}

impl JsonCaseStudyRepository {
    /// Create a repository over the document at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CaseStudyRepository for JsonCaseStudyRepository {
    async fn list(&self) -> StoreResult<Vec<CaseStudy>> {
        read_document(&self.path).await
    }

    async fn find_by_slug(&self, slug: &str) -> StoreResult<Option<CaseStudy>> {
        Ok(self.list().await?.into_iter().find(|s| s.slug == slug))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const DOCUMENT: &str = r#"[
        {
            "id": "cs-001",
            "title": "Retail Analytics Platform",
            "slug": "retail-analytics-platform",
            "category": "Data Engineering",
            "client": "Confidential Retailer",
            "summary": "Unified reporting across 40 stores.",
            "content": "Full write-up.",
            "links": [{ "name": "Overview", "url": "https://example.com" }]
        }
    ]"#;

    #[tokio::test]
    async fn test_list_and_find_by_slug() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("case-studies.json");
        std::fs::write(&path, DOCUMENT).unwrap();
        let repo = JsonCaseStudyRepository::new(path);

        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].client, "Confidential Retailer");

        let found = repo
            .find_by_slug("retail-analytics-platform")
            .await
            .unwrap();
        assert!(found.is_some());
        assert!(repo.find_by_slug("unknown").await.unwrap().is_none());
    }
}
