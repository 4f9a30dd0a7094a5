//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate router/view collaborators into the breadcrumb use-case.
//! - Keep host frameworks decoupled from trail bookkeeping.

pub mod trail;
