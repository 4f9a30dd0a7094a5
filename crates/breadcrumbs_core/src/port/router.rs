//! Router port and in-memory route table.
//!
//! # Responsibility
//! - Define the URL-generation contract the trail depends on.
//! - Provide `RouteTable`, a small named-pattern router for wiring and tests.
//!
//! # Invariants
//! - Router errors are owned by the router implementation; callers pass them on.
//! - `RouteTable` never mutates state during `generate`.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::{BTreeMap, BTreeSet};
use std::error::Error;
use std::fmt::{Display, Formatter};

static PLACEHOLDER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("valid route placeholder regex")
});

/// Route parameters keyed by placeholder name.
pub type RouteParams = BTreeMap<String, String>;

/// URL generation contract for named routes.
pub trait Router {
    type Error;

    /// Resolves `name` with `params` into a concrete URL.
    fn generate(&self, name: &str, params: &RouteParams) -> Result<String, Self::Error>;
}

impl<T: Router + ?Sized> Router for &T {
    type Error = T::Error;

    fn generate(&self, name: &str, params: &RouteParams) -> Result<String, Self::Error> {
        (**self).generate(name, params)
    }
}

/// Route generation and registration errors for [`RouteTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    EmptyRouteName,
    InvalidPattern { route: String, pattern: String },
    UnknownRoute(String),
    MissingParameter { route: String, parameter: String },
}

impl Display for RouteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyRouteName => write!(f, "route name must not be empty"),
            Self::InvalidPattern { route, pattern } => {
                write!(f, "route `{route}` has invalid pattern `{pattern}`; expected leading `/`")
            }
            Self::UnknownRoute(name) => write!(f, "unknown route: {name}"),
            Self::MissingParameter { route, parameter } => {
                write!(f, "route `{route}` requires parameter `{parameter}`")
            }
        }
    }
}

impl Error for RouteError {}

/// Named path patterns such as `/users/{id}`.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: BTreeMap<String, String>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers or replaces one named route.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        pattern: impl Into<String>,
    ) -> Result<(), RouteError> {
        let name = name.into();
        let pattern = pattern.into();
        if name.trim().is_empty() {
            return Err(RouteError::EmptyRouteName);
        }
        if !pattern.starts_with('/') {
            return Err(RouteError::InvalidPattern {
                route: name,
                pattern,
            });
        }
        self.routes.insert(name, pattern);
        Ok(())
    }

    /// Builder form of [`RouteTable::register`].
    pub fn with_route(
        mut self,
        name: impl Into<String>,
        pattern: impl Into<String>,
    ) -> Result<Self, RouteError> {
        self.register(name, pattern)?;
        Ok(self)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.routes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl Router for RouteTable {
    type Error = RouteError;

    /// Substitutes `{name}` placeholders and appends leftovers as a query.
    ///
    /// Values are inserted verbatim, without percent-encoding.
    fn generate(&self, name: &str, params: &RouteParams) -> Result<String, RouteError> {
        let pattern = self
            .routes
            .get(name)
            .ok_or_else(|| RouteError::UnknownRoute(name.to_string()))?;

        let mut consumed = BTreeSet::new();
        let mut missing = None;
        let path = PLACEHOLDER_RE.replace_all(pattern, |caps: &Captures<'_>| {
            let key = &caps[1];
            match params.get(key) {
                Some(value) => {
                    consumed.insert(key.to_string());
                    value.clone()
                }
                None => {
                    missing.get_or_insert_with(|| key.to_string());
                    String::new()
                }
            }
        });

        if let Some(parameter) = missing {
            log::warn!(
                "event=route_generate module=router status=error reason=missing_parameter"
            );
            return Err(RouteError::MissingParameter {
                route: name.to_string(),
                parameter,
            });
        }

        let query = params
            .iter()
            .filter(|(key, _)| !consumed.contains(key.as_str()))
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>();

        if query.is_empty() {
            Ok(path.into_owned())
        } else {
            Ok(format!("{path}?{}", query.join("&")))
        }
    }
}
