//! # Documents
//!
//! A [`SchemaForm`] is the root of a form definition: an ordered list of top-level nodes that
//! together produce the two artifacts downstream tools consume.
//!
//! - `form()`: a JSON array with one layout fragment per top-level node
//! - `schema()`: a JSON Schema object combining every node's schema fragment with `allOf`
//!
//! Both follow the same fail-soft policy as every other element. [`SchemaForm::to_value`] is
//! the strict path: it refuses to produce a document when anything failed to render, when a
//! fragment is not valid JSON, or when two inputs share a key.

use crate::config::FormConfig;
use crate::element::{own_render_errors, Element, Node};
use crate::error::{FormError, RenderError, Result};
use crate::input::Input;
use crate::templates::{Templates, DOCUMENT_FORM, DOCUMENT_SCHEMA};
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaForm {
    title: String,
    elements: Vec<Node>,
}

#[derive(Serialize)]
struct DocumentContext<'a> {
    title: &'a str,
    elements: Vec<String>,
}

impl SchemaForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn add_element(&mut self, element: impl Into<Node>) {
        self.elements.push(element.into());
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.set_title(title);
        self
    }

    pub fn with_element(mut self, element: impl Into<Node>) -> Self {
        self.add_element(element);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn elements(&self) -> &[Node] {
        &self.elements
    }

    /// Fails on the first input key that appears twice anywhere in the tree.
    pub fn check_keys(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for input in self.inputs() {
            if !seen.insert(input.key().to_string()) {
                return Err(FormError::DuplicateKey(input.key().to_string()));
            }
        }
        Ok(())
    }

    /// Assembles `{"schema": .., "form": ..}`, failing instead of degrading.
    pub fn to_value(&self, templates: &Templates) -> Result<Value> {
        self.check_keys()?;

        let errors = self.render_errors(templates);
        if !errors.is_empty() {
            return Err(FormError::Incomplete(errors));
        }

        let schema: Value = serde_json::from_str(&self.try_schema_with(templates)?)?;
        let form: Value = serde_json::from_str(&self.try_form_with(templates)?)?;
        Ok(json!({ "schema": schema, "form": form }))
    }

    /// Renders the whole document with the templates a config describes.
    pub fn to_json(&self, config: &FormConfig) -> Result<String> {
        let templates = Templates::from_config(config)?;
        let value = self.to_value(&templates)?;
        let output = if config.pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        Ok(output)
    }

    fn context(&self, fragments: Vec<String>) -> DocumentContext<'_> {
        DocumentContext {
            title: &self.title,
            elements: fragments,
        }
    }
}

impl Element for SchemaForm {
    fn try_form_with(&self, templates: &Templates) -> std::result::Result<String, RenderError> {
        let fragments = self
            .elements
            .iter()
            .map(|element| element.form_with(templates))
            .collect();
        templates.render(DOCUMENT_FORM, &self.context(fragments))
    }

    fn try_schema_with(&self, templates: &Templates) -> std::result::Result<String, RenderError> {
        let fragments = self
            .elements
            .iter()
            .map(|element| element.schema_with(templates))
            .collect();
        templates.render(DOCUMENT_SCHEMA, &self.context(fragments))
    }

    fn inputs(&self) -> Vec<Input> {
        self.elements.iter().flat_map(Element::inputs).collect()
    }

    fn render_errors(&self, templates: &Templates) -> Vec<RenderError> {
        let mut errors: Vec<RenderError> = self
            .elements
            .iter()
            .flat_map(|element| element.render_errors(templates))
            .collect();
        errors.extend(own_render_errors(self, templates));
        errors
    }
}
