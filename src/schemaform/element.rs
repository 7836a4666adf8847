//! # Elements
//!
//! The capability shared by everything that can sit inside a [`Tab`] (and by the document
//! root): producing a form fragment, a schema fragment, and the flattened list of leaf inputs.
//!
//! The set of nestable kinds is closed ([`Node`]); each kind implements [`Element`] and `Node`
//! dispatches to it. Composites recurse through `Node`, so nesting depth and mixing of kinds
//! never change how a subtree is walked.
//!
//! ## Failure Policy
//!
//! Implementors only write the strict `try_*_with` methods. The provided `form*`/`schema*`
//! methods turn a [`RenderError`] into a `warn` event plus an empty fragment, so one broken
//! subtree cannot abort a larger form. Callers that need to detect partial output ask for
//! [`Element::render_errors`] instead.

use crate::error::RenderError;
use crate::fieldset::TabFieldset;
use crate::input::Input;
use crate::tab::Tab;
use crate::templates::Templates;
use tracing::warn;

pub trait Element {
    /// Renders the form (layout) fragment, including children in their stored order.
    fn try_form_with(&self, templates: &Templates) -> Result<String, RenderError>;

    /// Renders the schema (data shape) fragment, including children in their stored order.
    fn try_schema_with(&self, templates: &Templates) -> Result<String, RenderError>;

    /// All leaf inputs of this subtree, depth-first, in insertion order.
    fn inputs(&self) -> Vec<Input>;

    /// Every failure fail-soft rendering of this subtree would swallow.
    ///
    /// The default covers the element's own fragments; composites add their children's.
    fn render_errors(&self, templates: &Templates) -> Vec<RenderError> {
        own_render_errors(self, templates)
    }

    fn form_with(&self, templates: &Templates) -> String {
        fail_soft(self.try_form_with(templates))
    }

    fn schema_with(&self, templates: &Templates) -> String {
        fail_soft(self.try_schema_with(templates))
    }

    /// The form fragment rendered with the built-in templates, or `""` on failure.
    fn form(&self) -> String {
        fail_soft(Templates::builtin().and_then(|templates| self.try_form_with(templates)))
    }

    /// The schema fragment rendered with the built-in templates, or `""` on failure.
    fn schema(&self) -> String {
        fail_soft(Templates::builtin().and_then(|templates| self.try_schema_with(templates)))
    }
}

/// Failures of an element's own two fragments.
pub(crate) fn own_render_errors<E: Element + ?Sized>(
    element: &E,
    templates: &Templates,
) -> Vec<RenderError> {
    [
        element.try_form_with(templates),
        element.try_schema_with(templates),
    ]
    .into_iter()
    .filter_map(Result::err)
    .collect()
}

/// Logs a render failure and degrades it to an empty fragment.
pub(crate) fn fail_soft(result: Result<String, RenderError>) -> String {
    result.unwrap_or_else(|err| {
        warn!(template = err.template(), error = %err, "fragment failed to render");
        String::new()
    })
}

/// Any element that can be nested inside a [`Tab`].
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Input(Input),
    Tab(Tab),
    TabFieldset(TabFieldset),
}

impl Element for Node {
    fn try_form_with(&self, templates: &Templates) -> Result<String, RenderError> {
        match self {
            Node::Input(input) => input.try_form_with(templates),
            Node::Tab(tab) => tab.try_form_with(templates),
            Node::TabFieldset(fieldset) => fieldset.try_form_with(templates),
        }
    }

    fn try_schema_with(&self, templates: &Templates) -> Result<String, RenderError> {
        match self {
            Node::Input(input) => input.try_schema_with(templates),
            Node::Tab(tab) => tab.try_schema_with(templates),
            Node::TabFieldset(fieldset) => fieldset.try_schema_with(templates),
        }
    }

    fn inputs(&self) -> Vec<Input> {
        match self {
            Node::Input(input) => input.inputs(),
            Node::Tab(tab) => tab.inputs(),
            Node::TabFieldset(fieldset) => fieldset.inputs(),
        }
    }

    fn render_errors(&self, templates: &Templates) -> Vec<RenderError> {
        match self {
            Node::Input(input) => input.render_errors(templates),
            Node::Tab(tab) => tab.render_errors(templates),
            Node::TabFieldset(fieldset) => fieldset.render_errors(templates),
        }
    }
}

impl From<Input> for Node {
    fn from(input: Input) -> Self {
        Node::Input(input)
    }
}

impl From<Tab> for Node {
    fn from(tab: Tab) -> Self {
        Node::Tab(tab)
    }
}

impl From<TabFieldset> for Node {
    fn from(fieldset: TabFieldset) -> Self {
        Node::TabFieldset(fieldset)
    }
}
