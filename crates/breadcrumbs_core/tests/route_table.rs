use breadcrumbs_core::{RouteError, RouteParams, RouteTable, Router};

fn params(pairs: &[(&str, &str)]) -> RouteParams {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

fn client_routes() -> RouteTable {
    let mut table = RouteTable::new();
    table.register("admin-home", "/admin").expect("register home");
    table
        .register("client-profile", "/admin/clients/{id}")
        .expect("register client profile");
    table
        .register("client-invoice", "/admin/clients/{id}/invoices/{invoice_id}")
        .expect("register client invoice");
    table
}

#[test]
fn generates_static_route() {
    let table = client_routes();
    let url = table
        .generate("admin-home", &RouteParams::new())
        .expect("static route");
    assert_eq!(url, "/admin");
}

#[test]
fn substitutes_every_placeholder() {
    let table = client_routes();
    let url = table
        .generate(
            "client-invoice",
            &params(&[("id", "7"), ("invoice_id", "301")]),
        )
        .expect("invoice route");
    assert_eq!(url, "/admin/clients/7/invoices/301");
}

#[test]
fn appends_unused_params_as_sorted_query() {
    let table = client_routes();
    let url = table
        .generate(
            "client-profile",
            &params(&[("tab", "billing"), ("id", "7"), ("page", "2")]),
        )
        .expect("profile route");
    assert_eq!(url, "/admin/clients/7?page=2&tab=billing");
}

#[test]
fn unknown_route_is_reported_by_name() {
    let table = client_routes();
    let err = table
        .generate("missing", &RouteParams::new())
        .expect_err("unknown route must fail");
    assert_eq!(err, RouteError::UnknownRoute("missing".to_string()));
    assert_eq!(err.to_string(), "unknown route: missing");
}

#[test]
fn missing_placeholder_value_is_reported() {
    let table = client_routes();
    let err = table
        .generate("client-profile", &RouteParams::new())
        .expect_err("missing id must fail");
    assert!(matches!(
        err,
        RouteError::MissingParameter { ref parameter, .. } if parameter == "id"
    ));
}

#[test]
fn register_replaces_existing_pattern() {
    let mut table = client_routes();
    table
        .register("admin-home", "/dashboard")
        .expect("re-register home");
    assert_eq!(table.len(), 3);
    assert_eq!(
        table
            .generate("admin-home", &RouteParams::new())
            .expect("static route"),
        "/dashboard"
    );
}
