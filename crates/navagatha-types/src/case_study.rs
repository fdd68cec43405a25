//! Case study types
//!
//! Case studies are a read-only collection; records are authored directly in
//! the persisted document, so there is no creation/patch input here.

use serde::{Deserialize, Serialize};

/// A published case study
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseStudy {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub category: String,
    pub client: String,
    pub summary: String,
    pub content: String,
    pub links: Vec<CaseStudyLink>,
}

/// External link attached to a case study
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseStudyLink {
    pub name: String,
    pub url: String,
}
