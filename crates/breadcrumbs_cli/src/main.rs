//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `breadcrumbs_core` linkage and wiring of the reference collaborators.
//! - Print a deterministic demo trail for quick local sanity checks.
//!
//! Set `BREADCRUMBS_LOG_DIR` to an absolute path to also write core logs.

use breadcrumbs_core::{
    core_version, default_log_level, init_logging, BreadcrumbTrail, LinkRequest, RouteError,
    RouteTable, TemplateRegistry, ViewContext, BREADCRUMBS_KEY,
};
use std::process::ExitCode;

const TRAIL_TEMPLATE: &str = "partials/breadcrumbs";

fn main() -> ExitCode {
    if let Ok(log_dir) = std::env::var("BREADCRUMBS_LOG_DIR") {
        if let Err(err) = init_logging(default_log_level(), &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    println!("breadcrumbs_core version={}", core_version());
    match render_demo() {
        Ok(markup) => {
            println!("{markup}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("demo trail failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn demo_routes() -> Result<RouteTable, RouteError> {
    RouteTable::new()
        .with_route("admin-home", "/admin")?
        .with_route("client-list", "/admin/clients")?
        .with_route("client-profile", "/admin/clients/{id}")?
        .with_route("changelog", "/admin/changelog")
}

fn render_demo() -> Result<String, Box<dyn std::error::Error>> {
    let routes = demo_routes()?;
    let mut view = TemplateRegistry::new();
    view.register(TRAIL_TEMPLATE, render_trail);

    let mut trail = BreadcrumbTrail::new(&routes, &mut view);
    trail.init(TRAIL_TEMPLATE);
    trail.add(LinkRequest::route("Dashboard", "admin-home"))?;
    trail.add(LinkRequest::route("Clients", "client-list"))?;
    trail.add(
        LinkRequest::route("Acme Ltd", "client-profile")
            .with_route_param("id", "12")
            .with_attribute("class", "active"),
    )?;
    trail.set_notice("Update available", "changelog", false)?;
    trail.build()?;

    Ok(view
        .context()
        .get_str(BREADCRUMBS_KEY)
        .unwrap_or_default()
        .to_string())
}

fn render_trail(context: &ViewContext) -> String {
    let mut markup = String::from("<ol class=\"breadcrumb\">");
    let links = context
        .get("breadcrumb_links")
        .and_then(|value| value.as_array())
        .cloned()
        .unwrap_or_default();
    for link in &links {
        let text = link["text"].as_str().unwrap_or_default();
        let params = link["params"].as_str().unwrap_or_default();
        match link["route"].as_str() {
            Some(href) => markup.push_str(&format!("<li><a href=\"{href}\" {params}>{text}</a></li>")),
            None => markup.push_str(&format!("<li {params}>{text}</li>")),
        }
    }
    markup.push_str("</ol>");

    if let Some(notice) = context.get("breadcrumb_notice").filter(|value| !value.is_null()) {
        markup.push_str(&format!(
            "<a class=\"breadcrumb-notice\" href=\"{}\">{}</a>",
            notice["route"].as_str().unwrap_or_default(),
            notice["text"].as_str().unwrap_or_default()
        ));
    }
    markup
}
