//! Breadcrumb link and notice records.
//!
//! # Responsibility
//! - Define the entries a trail accumulates and hands to the view layer.
//! - Define the caller-facing request shape for adding one link.
//!
//! # Invariants
//! - `LinkEntry` and `Notice` are immutable once stored in a trail.
//! - `target` is serialized as `route` to match template variable naming.
//! - `LinkEntry::params` is always a string, empty when no attributes were given.

use crate::model::attributes::HtmlAttributes;
use crate::port::router::RouteParams;
use serde::{Deserialize, Serialize};

/// One rendered breadcrumb link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEntry {
    /// Display text, stored verbatim.
    pub text: String,
    /// Resolved URL, literal URL, or `None` for a placeholder crumb.
    #[serde(rename = "route")]
    pub target: Option<String>,
    /// Pre-flattened `key="value" ` attribute string.
    pub params: String,
}

/// Optional callout shown next to the trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub text: String,
    #[serde(rename = "route")]
    pub target: String,
}

/// Input for [`crate::BreadcrumbTrail::add`].
///
/// `route` is a route name unless `is_literal_link` is set, in which case it
/// is used as the final target without consulting the router.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkRequest {
    pub text: String,
    pub route: Option<String>,
    pub route_params: RouteParams,
    pub html_attributes: HtmlAttributes,
    pub is_literal_link: bool,
}

impl LinkRequest {
    /// Link resolved through a named route.
    pub fn route(text: impl Into<String>, route: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            route: Some(route.into()),
            ..Self::default()
        }
    }

    /// Link whose target is used verbatim (external URL, anchor, ...).
    pub fn literal(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            route: Some(url.into()),
            is_literal_link: true,
            ..Self::default()
        }
    }

    /// Crumb without a target, typically the current page.
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_route_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.route_params.insert(key.into(), value.into());
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.html_attributes.insert(key, value);
        self
    }

    /// Returns the route name the router must resolve, if any.
    ///
    /// Literal links, absent routes, and empty route strings bypass the router.
    pub fn route_to_resolve(&self) -> Option<&str> {
        if self.is_literal_link {
            return None;
        }
        self.route.as_deref().filter(|route| !route.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::{LinkEntry, LinkRequest, Notice};
    use serde_json::json;

    #[test]
    fn route_to_resolve_skips_literal_and_empty_routes() {
        assert_eq!(
            LinkRequest::route("Home", "home").route_to_resolve(),
            Some("home")
        );
        assert_eq!(
            LinkRequest::literal("Docs", "https://example.com").route_to_resolve(),
            None
        );
        assert_eq!(LinkRequest::route("Blank", "").route_to_resolve(), None);
        assert_eq!(LinkRequest::text_only("Here").route_to_resolve(), None);
    }

    #[test]
    fn link_entry_serializes_target_as_route() {
        let entry = LinkEntry {
            text: "Home".to_string(),
            target: None,
            params: String::new(),
        };
        let value = serde_json::to_value(&entry).expect("serialize link entry");
        assert_eq!(value, json!({"text": "Home", "route": null, "params": ""}));
    }

    #[test]
    fn notice_serializes_target_as_route() {
        let notice = Notice {
            text: "Update".to_string(),
            target: "/changelog".to_string(),
        };
        let value = serde_json::to_value(&notice).expect("serialize notice");
        assert_eq!(value, json!({"text": "Update", "route": "/changelog"}));
    }
}
