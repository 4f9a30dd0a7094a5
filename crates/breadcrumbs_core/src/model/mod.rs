//! Breadcrumb domain model.
//!
//! # Responsibility
//! - Define the records a trail accumulates (`LinkEntry`, `Notice`).
//! - Keep attribute flattening as a pure function apart from trail state.

pub mod attributes;
pub mod link;
