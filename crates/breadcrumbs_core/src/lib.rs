//! Breadcrumb trail accumulation and rendering core.
//! Route resolution and template rendering are injected collaborators.

pub mod logging;
pub mod model;
pub mod port;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::attributes::{render_attribute_string, HtmlAttributes};
pub use model::link::{LinkEntry, LinkRequest, Notice};
pub use port::router::{RouteError, RouteParams, RouteTable, Router};
pub use port::view::{TemplateRegistry, View, ViewContext, ViewError};
pub use service::trail::{
    BreadcrumbTrail, TrailId, BREADCRUMBS_KEY, BREADCRUMB_LINKS_KEY, BREADCRUMB_NOTICE_KEY,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
