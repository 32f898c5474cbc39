//! Named template helpers.
//!
//! Helpers are plain functions over their positional arguments. The renderer
//! adapts them to the template engine, so bindings never touch it directly.

use std::{fmt, sync::Arc};

use indexmap::IndexMap;
use revgen_core::{
    pluralize, singularize, to_camel_case, to_kebab_case, to_pascal_case, to_snake_case, untitle,
};
use serde_json::Value;
use thiserror::Error;

use crate::generation::ColumnParam;

/// Failure raised by a helper; surfaces as a render error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct HelperError {
    pub message: String,
}

impl HelperError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A registered helper.
pub type HelperFn = Arc<dyn Fn(&Args<'_>) -> Result<String, HelperError> + Send + Sync>;

/// Positional arguments passed to a helper.
#[derive(Debug, Clone)]
pub struct Args<'a> {
    helper: &'a str,
    values: Vec<&'a Value>,
}

impl<'a> Args<'a> {
    pub fn new(helper: &'a str, values: Vec<&'a Value>) -> Self {
        Self { helper, values }
    }

    /// Name of the helper being called.
    pub fn helper(&self) -> &str {
        self.helper
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Argument `index`, or an error naming the helper.
    pub fn value(&self, index: usize) -> Result<&'a Value, HelperError> {
        self.values.get(index).copied().ok_or_else(|| {
            HelperError::new(format!(
                "'{}' expects an argument at position {}",
                self.helper, index
            ))
        })
    }

    /// Argument `index` as a string.
    pub fn str(&self, index: usize) -> Result<&'a str, HelperError> {
        let value = self.value(index)?;
        value.as_str().ok_or_else(|| {
            HelperError::new(format!(
                "'{}' expects a string at position {}, got {}",
                self.helper, index, value
            ))
        })
    }

    /// Argument `index` as a column.
    pub fn column(&self, index: usize) -> Result<ColumnParam, HelperError> {
        let value = self.value(index)?;
        serde_json::from_value(value.clone()).map_err(|e| {
            HelperError::new(format!(
                "'{}' expects a column at position {}: {}",
                self.helper, index, e
            ))
        })
    }

    /// Columns of the table passed as argument `index`.
    pub fn columns(&self, index: usize) -> Result<Vec<ColumnParam>, HelperError> {
        let value = self.value(index)?;
        let columns = value.get("columns").ok_or_else(|| {
            HelperError::new(format!(
                "'{}' expects a table at position {}",
                self.helper, index
            ))
        })?;
        serde_json::from_value(columns.clone()).map_err(|e| {
            HelperError::new(format!(
                "'{}' expects a table at position {}: {}",
                self.helper, index, e
            ))
        })
    }
}

/// Helpers keyed by name, in registration order.
#[derive(Clone, Default)]
pub struct Helpers {
    helpers: IndexMap<&'static str, HelperFn>,
}

impl Helpers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case and inflection helpers shared by every language.
    pub fn common() -> Self {
        let mut helpers = Self::new();
        helpers
            .unary("pascal", to_pascal_case)
            .unary("camel", to_camel_case)
            .unary("snake", to_snake_case)
            .unary("kebab", to_kebab_case)
            .unary("untitle", untitle)
            .unary("plural", pluralize)
            .unary("singular", singularize)
            .unary("upper", str::to_uppercase)
            .unary("lower", str::to_lowercase);
        helpers
    }

    /// Register a helper. A later registration replaces an earlier one.
    pub fn add<F>(&mut self, name: &'static str, helper: F) -> &mut Self
    where
        F: Fn(&Args<'_>) -> Result<String, HelperError> + Send + Sync + 'static,
    {
        self.helpers.insert(name, Arc::new(helper));
        self
    }

    /// Register a helper taking a single string.
    pub fn unary(&mut self, name: &'static str, f: fn(&str) -> String) -> &mut Self {
        self.add(name, move |args: &Args<'_>| Ok(f(args.str(0)?)))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.helpers.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.helpers.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.helpers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.helpers.is_empty()
    }

    /// Call a helper directly, outside of a template.
    pub fn call(&self, name: &str, values: &[Value]) -> Option<Result<String, HelperError>> {
        let helper = self.helpers.get(name)?;
        let args = Args::new(name, values.iter().collect());
        Some(helper(&args))
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&'static str, &HelperFn)> {
        self.helpers.iter().map(|(name, f)| (*name, f))
    }
}

impl fmt::Debug for Helpers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.helpers.keys()).finish()
    }
}
