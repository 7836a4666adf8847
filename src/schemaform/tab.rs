use crate::element::{own_render_errors, Element, Node};
use crate::error::RenderError;
use crate::input::Input;
use crate::templates::{Templates, TAB_FORM, TAB_SCHEMA};
use serde::Serialize;

/// An ordered, titled group of elements.
///
/// Elements are owned by value: adding one moves it into the tab, so later changes to a
/// caller's copy never reach the stored element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tab {
    title: String,
    elements: Vec<Node>,
}

#[derive(Serialize)]
struct TabContext<'a> {
    title: &'a str,
    elements: Vec<String>,
}

impl Tab {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Appends an element after the existing ones.
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

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl Element for Tab {
    fn try_form_with(&self, templates: &Templates) -> Result<String, RenderError> {
        let context = TabContext {
            title: &self.title,
            elements: self
                .elements
                .iter()
                .map(|element| element.form_with(templates))
                .collect(),
        };
        templates.render(TAB_FORM, &context)
    }

    fn try_schema_with(&self, templates: &Templates) -> Result<String, RenderError> {
        let context = TabContext {
            title: &self.title,
            elements: self
                .elements
                .iter()
                .map(|element| element.schema_with(templates))
                .collect(),
        };
        templates.render(TAB_SCHEMA, &context)
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
