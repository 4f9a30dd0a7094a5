//! Collaborator contracts consumed by the trail service.
//!
//! URL generation and template rendering are owned by the host application.
//! The trail only sees these traits, injected at construction time.

pub mod router;
pub mod view;
