//! View port and in-memory template registry.
//!
//! # Responsibility
//! - Define the variable-binding and template-fetch contract used by `build`.
//! - Provide `TemplateRegistry`, a view backed by registered render functions.
//!
//! # Invariants
//! - `set` is last-write-wins per key.
//! - `fetch` renders against the context as bound at call time.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Variable-binding and template-rendering contract.
pub trait View {
    type Error;

    /// Binds `value` under `key` in the rendering context.
    fn set<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), Self::Error>;

    /// Renders `template_id` against the currently bound context.
    fn fetch(&mut self, template_id: &str) -> Result<String, Self::Error>;
}

impl<V: View + ?Sized> View for &mut V {
    type Error = V::Error;

    fn set<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), Self::Error> {
        (**self).set(key, value)
    }

    fn fetch(&mut self, template_id: &str) -> Result<String, Self::Error> {
        (**self).fetch(template_id)
    }
}

/// Bound template variables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewContext {
    vars: BTreeMap<String, Value>,
}

impl ViewContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.vars.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.vars.get(key)
    }

    /// Returns the variable when it is bound to a JSON string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.vars.get(key).and_then(Value::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

/// Errors raised by [`TemplateRegistry`].
#[derive(Debug)]
pub enum ViewError {
    EmptyTemplateId,
    TemplateNotFound(String),
    Serialize(serde_json::Error),
}

impl Display for ViewError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTemplateId => write!(f, "template id must not be empty"),
            Self::TemplateNotFound(id) => write!(f, "template not found: {id}"),
            Self::Serialize(err) => write!(f, "failed to bind view variable: {err}"),
        }
    }
}

impl Error for ViewError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Serialize(err) => Some(err),
            Self::EmptyTemplateId | Self::TemplateNotFound(_) => None,
        }
    }
}

impl From<serde_json::Error> for ViewError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

type RenderFn = Box<dyn Fn(&ViewContext) -> String>;

/// View that renders templates registered as plain functions.
#[derive(Default)]
pub struct TemplateRegistry {
    templates: BTreeMap<String, RenderFn>,
    context: ViewContext,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers or replaces the renderer for `template_id`.
    pub fn register<F>(&mut self, template_id: impl Into<String>, render: F)
    where
        F: Fn(&ViewContext) -> String + 'static,
    {
        self.templates.insert(template_id.into(), Box::new(render));
    }

    pub fn has_template(&self, template_id: &str) -> bool {
        self.templates.contains_key(template_id)
    }

    /// Current bound variables.
    pub fn context(&self) -> &ViewContext {
        &self.context
    }
}

impl std::fmt::Debug for TemplateRegistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateRegistry")
            .field("templates", &self.templates.keys().collect::<Vec<_>>())
            .field("context", &self.context)
            .finish()
    }
}

impl View for TemplateRegistry {
    type Error = ViewError;

    fn set<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), ViewError> {
        let value = serde_json::to_value(value)?;
        self.context.insert(key, value);
        Ok(())
    }

    fn fetch(&mut self, template_id: &str) -> Result<String, ViewError> {
        if template_id.is_empty() {
            return Err(ViewError::EmptyTemplateId);
        }
        let render = self
            .templates
            .get(template_id)
            .ok_or_else(|| ViewError::TemplateNotFound(template_id.to_string()))?;
        Ok(render(&self.context))
    }
}
