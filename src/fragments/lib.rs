//! # Fragments - Named Template Rendering for JSON Output
//!
//! A small layer over [minijinja](https://docs.rs/minijinja) for producing textual fragments
//! (usually JSON) from serializable contexts.
//!
//! ## The Problem
//!
//! Composite documents are often assembled from pieces rendered by many small templates:
//! - Recompiling a template on every call wastes work when the same templates render repeatedly
//! - HTML-style auto escaping corrupts JSON fragments that are nested inside each other
//! - A child that failed to render should not leave a dangling separator in its parent
//!
//! ## The Solution
//!
//! - A [`Renderer`] holds templates compiled once, up front, under stable names
//! - Auto escaping is disabled; values are encoded explicitly with the `tojson` filter
//! - The `join_fragments` filter joins already-rendered child fragments, skipping empty ones
//!
//! ## Quick Example
//!
//! ```rust
//! use fragments::Renderer;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Group {
//!     title: String,
//!     items: Vec<String>,
//! }
//!
//! let mut renderer = Renderer::new();
//! renderer
//!     .add_template("group", r#"{"title": {{ title|tojson }}, "items": [{{ items|join_fragments }}]}"#)
//!     .unwrap();
//!
//! let group = Group {
//!     title: "General".into(),
//!     items: vec!["1".into(), "".into(), "2".into()],
//! };
//! let output = renderer.render("group", &group).unwrap();
//! assert_eq!(output, r#"{"title": "General", "items": [1, 2]}"#);
//! ```
//!
//! ## Whitespace
//!
//! Renderers enable `trim_blocks` and `lstrip_blocks`, so block tags on their own line do not
//! leave blank lines behind. Templates can be laid out for readability without affecting the
//! structure of the output.

use minijinja::{AutoEscape, Environment, Value};
use serde::Serialize;

pub use minijinja::{Error, ErrorKind};

/// Separator used by `join_fragments` when none is given.
pub const DEFAULT_SEPARATOR: &str = ", ";

/// A renderer with pre-registered templates.
///
/// Templates are compiled when they are added; rendering only looks them up by name.
///
/// # Example
///
/// ```rust
/// use fragments::Renderer;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Field { key: String }
///
/// let mut renderer = Renderer::new();
/// renderer.add_template("field", r#"{"key": {{ key|tojson }}}"#).unwrap();
///
/// let out = renderer.render("field", &Field { key: "name".into() }).unwrap();
/// assert_eq!(out, r#"{"key": "name"}"#);
/// ```
pub struct Renderer {
    env: Environment<'static>,
    names: Vec<String>,
}

impl Renderer {
    /// Creates an empty renderer with the fragment filters registered.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        register_filters(&mut env);
        Self {
            env,
            names: Vec::new(),
        }
    }

    /// Registers a named template.
    ///
    /// The template is compiled immediately; errors are returned if syntax is invalid.
    /// Registering a name twice replaces the earlier template.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), Error> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())?;
        if !self.names.iter().any(|n| n == name) {
            self.names.push(name.to_string());
        }
        Ok(())
    }

    /// Returns true if a template with the given name is registered.
    pub fn has_template(&self, name: &str) -> bool {
        self.env.get_template(name).is_ok()
    }

    /// Names of the registered templates, in registration order.
    pub fn template_names(&self) -> &[String] {
        &self.names
    }

    /// Renders a registered template with the given data.
    ///
    /// # Errors
    ///
    /// Returns an error if the template name is not found or rendering fails.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        let tmpl = self.env.get_template(name)?;
        tmpl.render(data)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Compiles and renders a one-off template.
///
/// Use a [`Renderer`] instead when the same template is rendered more than once.
pub fn render<T: Serialize>(template: &str, data: &T) -> Result<String, Error> {
    let mut renderer = Renderer::new();
    renderer.add_template("_inline", template)?;
    renderer.render("_inline", data)
}

fn register_filters(env: &mut Environment<'static>) {
    env.add_filter("join_fragments", join_fragments);
}

/// Joins a sequence of rendered fragments, dropping blank ones.
///
/// A blank entry is a child that produced no output; skipping it keeps list separators
/// balanced in the parent.
fn join_fragments(value: Value, separator: Option<String>) -> Result<String, Error> {
    let separator = separator.unwrap_or_else(|| DEFAULT_SEPARATOR.to_string());
    let parts: Vec<String> = value
        .try_iter()?
        .map(|item| item.to_string())
        .filter(|fragment| !fragment.trim().is_empty())
        .collect();
    Ok(parts.join(&separator))
}
