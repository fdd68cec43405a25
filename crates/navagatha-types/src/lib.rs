//! Navagatha Types - Shared domain types
//!
//! This crate contains domain types used across the portal services:
//! - Job postings and their creation/patch inputs
//! - Case studies (read-only collection)
//! - Slug derivation for URL-safe identifiers

pub mod case_study;
pub mod job;
pub mod slug;

pub use case_study::*;
pub use job::*;
pub use slug::slugify;
