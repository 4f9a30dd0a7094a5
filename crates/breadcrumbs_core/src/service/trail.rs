//! Breadcrumb trail use-case service.
//!
//! # Responsibility
//! - Accumulate ordered links and an optional notice for one render context.
//! - Resolve route names through the injected `Router`.
//! - Publish links/notice to the injected `View` and bind the rendered trail.
//!
//! # Invariants
//! - Links are append-only; insertion order is display order.
//! - At most one notice is active; the last successful `set_notice` wins.
//! - A failed router call leaves trail state untouched.
//! - `build` never mutates trail state.
//!
//! # See also
//! - `port::router`, `port::view`

use crate::model::attributes::render_attribute_string;
use crate::model::link::{LinkEntry, LinkRequest, Notice};
use crate::port::router::{RouteParams, Router};
use crate::port::view::View;
use log::{debug, warn};
use uuid::Uuid;

/// View variable holding the active notice (or `null`).
pub const BREADCRUMB_NOTICE_KEY: &str = "breadcrumb_notice";
/// View variable holding the ordered link list.
pub const BREADCRUMB_LINKS_KEY: &str = "breadcrumb_links";
/// View variable receiving the rendered trail markup.
pub const BREADCRUMBS_KEY: &str = "breadcrumbs";

/// Per-instance identifier used only for log correlation.
pub type TrailId = Uuid;

/// Breadcrumb accumulator scoped to a single request/render context.
pub struct BreadcrumbTrail<R: Router, V: View> {
    id: TrailId,
    router: R,
    view: V,
    template_id: String,
    links: Vec<LinkEntry>,
    notice: Option<Notice>,
}

impl<R: Router, V: View> BreadcrumbTrail<R, V> {
    /// Creates an uninitialized trail over the given collaborators.
    pub fn new(router: R, view: V) -> Self {
        Self {
            id: Uuid::new_v4(),
            router,
            view,
            template_id: String::new(),
            links: Vec::new(),
            notice: None,
        }
    }

    /// Binds the template used by [`BreadcrumbTrail::build`].
    ///
    /// No validation happens here; an unusable id surfaces from the view.
    pub fn init(&mut self, template_id: impl Into<String>) {
        self.template_id = template_id.into();
        debug!(
            "event=trail_init module=trail status=ok trail_id={} template={}",
            self.id, self.template_id
        );
    }

    /// Appends one link.
    ///
    /// # Contract
    /// - Non-literal, non-empty routes are resolved with `route_params`.
    /// - Literal links, absent routes and empty routes are stored verbatim.
    /// - Router errors are returned unchanged and nothing is appended.
    pub fn add(&mut self, request: LinkRequest) -> Result<(), R::Error> {
        let resolved = match request.route_to_resolve() {
            Some(route) => match self.router.generate(route, &request.route_params) {
                Ok(url) => Some(url),
                Err(err) => {
                    warn!(
                        "event=trail_add module=trail status=error trail_id={} reason=route_generate",
                        self.id
                    );
                    return Err(err);
                }
            },
            None => None,
        };
        let target = resolved.or(request.route);

        let params = render_attribute_string(&request.html_attributes);
        self.links.push(LinkEntry {
            text: request.text,
            target,
            params,
        });
        debug!(
            "event=trail_add module=trail status=ok trail_id={} links={}",
            self.id,
            self.links.len()
        );
        Ok(())
    }

    /// Sets or replaces the notice.
    ///
    /// Route resolution takes no parameters. On router failure the previous
    /// notice is kept.
    pub fn set_notice(
        &mut self,
        text: impl Into<String>,
        route: impl Into<String>,
        is_literal_link: bool,
    ) -> Result<(), R::Error> {
        let route = route.into();
        let target = if is_literal_link {
            route
        } else {
            match self.router.generate(&route, &RouteParams::new()) {
                Ok(url) => url,
                Err(err) => {
                    warn!(
                        "event=trail_notice module=trail status=error trail_id={} reason=route_generate",
                        self.id
                    );
                    return Err(err);
                }
            }
        };

        let replaced = self.notice.is_some();
        self.notice = Some(Notice {
            text: text.into(),
            target,
        });
        debug!(
            "event=trail_notice module=trail status=ok trail_id={} replaced={}",
            self.id, replaced
        );
        Ok(())
    }

    /// Publishes the trail to the view and binds the rendered markup.
    ///
    /// Order: notice, links, `fetch(template_id)`, then `breadcrumbs`.
    /// The first view error aborts the sequence and is returned unchanged.
    pub fn build(&mut self) -> Result<(), V::Error> {
        let result = self.publish();
        match &result {
            Ok(()) => debug!(
                "event=trail_build module=trail status=ok trail_id={} links={} notice={}",
                self.id,
                self.links.len(),
                self.notice.is_some()
            ),
            Err(_) => warn!(
                "event=trail_build module=trail status=error trail_id={} template={}",
                self.id, self.template_id
            ),
        }
        result
    }

    fn publish(&mut self) -> Result<(), V::Error> {
        self.view.set(BREADCRUMB_NOTICE_KEY, &self.notice)?;
        self.view.set(BREADCRUMB_LINKS_KEY, &self.links)?;
        let rendered = self.view.fetch(&self.template_id)?;
        self.view.set(BREADCRUMBS_KEY, &rendered)
    }

    pub fn trail_id(&self) -> TrailId {
        self.id
    }

    pub fn template_id(&self) -> &str {
        &self.template_id
    }

    /// Whether `init` has bound a non-empty template id.
    pub fn is_initialized(&self) -> bool {
        !self.template_id.is_empty()
    }

    pub fn links(&self) -> &[LinkEntry] {
        &self.links
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn router(&self) -> &R {
        &self.router
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Releases the collaborators, e.g. to render the outer page.
    pub fn into_parts(self) -> (R, V) {
        (self.router, self.view)
    }
}

#[cfg(test)]
mod tests {
    use super::BreadcrumbTrail;
    use crate::model::link::LinkRequest;
    use crate::port::router::RouteTable;
    use crate::port::view::TemplateRegistry;

    #[test]
    fn new_trail_is_uninitialized_and_empty() {
        let trail = BreadcrumbTrail::new(RouteTable::new(), TemplateRegistry::new());
        assert!(!trail.is_initialized());
        assert_eq!(trail.template_id(), "");
        assert!(trail.links().is_empty());
        assert!(trail.notice().is_none());
    }

    #[test]
    fn init_marks_trail_ready() {
        let mut trail = BreadcrumbTrail::new(RouteTable::new(), TemplateRegistry::new());
        trail.init("partials/breadcrumbs.tpl");
        assert!(trail.is_initialized());
        assert_eq!(trail.template_id(), "partials/breadcrumbs.tpl");
    }

    #[test]
    fn trail_ids_are_unique_per_instance() {
        let first = BreadcrumbTrail::new(RouteTable::new(), TemplateRegistry::new());
        let second = BreadcrumbTrail::new(RouteTable::new(), TemplateRegistry::new());
        assert_ne!(first.trail_id(), second.trail_id());
    }

    #[test]
    fn text_only_link_keeps_absent_target() {
        let mut trail = BreadcrumbTrail::new(RouteTable::new(), TemplateRegistry::new());
        trail
            .add(LinkRequest::text_only("Current page"))
            .expect("text-only link never consults router");
        assert_eq!(trail.links()[0].target, None);
        assert_eq!(trail.links()[0].params, "");
    }
}
