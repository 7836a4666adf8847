//! # Fragment Templates
//!
//! Every node renders its `form` and `schema` views through one of the named templates below.
//! The sources are kept as standalone files under `templates/` so they can be read and diffed
//! as the JSON they produce, and are included here as string constants.
//!
//! The built-in set is compiled once per process, on first use, and shared read-only after
//! that. A [`Templates`] value with some templates replaced can be built from overrides, which
//! is how callers restyle the output (or, in tests, force a render failure).
//!
//! Template contexts:
//!
//! | template              | context                                                     |
//! |-----------------------|-------------------------------------------------------------|
//! | `input_form/schema`   | the serialized [`crate::Input`] (`key`, `title`, `kind`, ...) |
//! | `tab_form/schema`     | `title`, `elements` (child fragments, in order)             |
//! | `tab_fieldset_form`   | `title`, `condition_check`, `condition`, `condition_flip`, `tabs` |
//! | `tab_fieldset_schema` | `title`, `tabs`                                             |
//! | `document_form/schema`| `title`, `elements`                                         |
//!
//! Child fragments are joined with the `join_fragments` filter, which drops children that
//! rendered to an empty string.

use crate::config::FormConfig;
use crate::error::RenderError;
use fragments::{Error, ErrorKind, Renderer};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

pub const INPUT_FORM: &str = "input_form";
pub const INPUT_SCHEMA: &str = "input_schema";
pub const TAB_FORM: &str = "tab_form";
pub const TAB_SCHEMA: &str = "tab_schema";
pub const TAB_FIELDSET_FORM: &str = "tab_fieldset_form";
pub const TAB_FIELDSET_SCHEMA: &str = "tab_fieldset_schema";
pub const DOCUMENT_FORM: &str = "document_form";
pub const DOCUMENT_SCHEMA: &str = "document_schema";

const BUILTIN_SOURCES: &[(&str, &str)] = &[
    (INPUT_FORM, include_str!("templates/input_form.tmp")),
    (INPUT_SCHEMA, include_str!("templates/input_schema.tmp")),
    (TAB_FORM, include_str!("templates/tab_form.tmp")),
    (TAB_SCHEMA, include_str!("templates/tab_schema.tmp")),
    (
        TAB_FIELDSET_FORM,
        include_str!("templates/tab_fieldset_form.tmp"),
    ),
    (
        TAB_FIELDSET_SCHEMA,
        include_str!("templates/tab_fieldset_schema.tmp"),
    ),
    (DOCUMENT_FORM, include_str!("templates/document_form.tmp")),
    (DOCUMENT_SCHEMA, include_str!("templates/document_schema.tmp")),
];

static BUILTIN: Lazy<Result<Templates, RenderError>> =
    Lazy::new(|| Templates::compile(&BTreeMap::new()));

/// A compiled set of fragment templates.
pub struct Templates {
    renderer: Renderer,
}

impl Templates {
    /// The process-wide built-in set.
    ///
    /// A built-in that fails to compile is reported on every call, so each render degrades
    /// the same way instead of panicking.
    pub fn builtin() -> Result<&'static Templates, RenderError> {
        BUILTIN.as_ref().map_err(Clone::clone)
    }

    /// Compiles the built-in set with some templates replaced by name.
    ///
    /// # Errors
    ///
    /// [`RenderError::UnknownTemplate`] if an override names no built-in template, and
    /// [`RenderError::Compile`] if any source fails to compile.
    pub fn with_overrides(overrides: &BTreeMap<String, String>) -> Result<Self, RenderError> {
        if let Some(name) = overrides.keys().find(|name| !is_builtin(name)) {
            return Err(RenderError::UnknownTemplate(name.clone()));
        }
        Self::compile(overrides)
    }

    /// Compiles the set described by a config (built-ins plus its overrides).
    pub fn from_config(config: &FormConfig) -> Result<Self, RenderError> {
        Self::with_overrides(&config.templates)
    }

    /// Names of all templates a set contains.
    pub fn names() -> impl Iterator<Item = &'static str> {
        BUILTIN_SOURCES.iter().map(|(name, _)| *name)
    }

    /// Renders the named template against a serializable context.
    pub fn render<T: Serialize>(&self, name: &str, context: &T) -> Result<String, RenderError> {
        self.renderer
            .render(name, context)
            .map_err(|err| render_error(name, err))
    }

    fn compile(overrides: &BTreeMap<String, String>) -> Result<Self, RenderError> {
        let mut renderer = Renderer::new();
        for &(name, builtin) in BUILTIN_SOURCES {
            let source = overrides.get(name).map(String::as_str).unwrap_or(builtin);
            renderer
                .add_template(name, source)
                .map_err(|err| RenderError::Compile {
                    name: name.to_string(),
                    message: err.to_string(),
                })?;
        }
        debug!(
            templates = BUILTIN_SOURCES.len(),
            overrides = overrides.len(),
            "compiled fragment templates"
        );
        Ok(Self { renderer })
    }
}

impl fmt::Debug for Templates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Templates")
            .field("names", &self.renderer.template_names())
            .finish()
    }
}

fn is_builtin(name: &str) -> bool {
    BUILTIN_SOURCES.iter().any(|(builtin, _)| *builtin == name)
}

fn render_error(name: &str, err: Error) -> RenderError {
    match err.kind() {
        ErrorKind::TemplateNotFound => RenderError::UnknownTemplate(name.to_string()),
        _ => RenderError::Render {
            name: name.to_string(),
            message: err.to_string(),
        },
    }
}
