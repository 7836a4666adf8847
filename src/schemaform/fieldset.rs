//! # Tab Fieldsets
//!
//! A [`TabFieldset`] groups [`Tab`]s under a title and can be made conditionally visible: its
//! display then depends on whether another field of the overall form has a value.
//!
//! Visibility is a layout concern only. The form fragment carries it as a `condition`
//! directive; the schema fragment never mentions it.
//!
//! ## Condition Polarity
//!
//! [`TabFieldset::set_condition`] takes a `default_hide` flag whose polarity is easy to misread:
//!
//! | `default_hide` | before `key` is set | after `key` is set | directive     |
//! |----------------|---------------------|--------------------|---------------|
//! | `false`        | hidden              | shown              | `model.key`   |
//! | `true`         | shown               | hidden             | `!model.key`  |
//!
//! An empty key turns the check off whatever the flag says.

use crate::element::{own_render_errors, Element};
use crate::error::RenderError;
use crate::input::Input;
use crate::tab::Tab;
use crate::templates::{Templates, TAB_FIELDSET_FORM, TAB_FIELDSET_SCHEMA};
use serde::Serialize;

/// When a conditional fieldset is displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visibility {
    /// Hidden until the key has a value.
    ShowWhenSet(String),
    /// Shown until the key has a value.
    HideWhenSet(String),
}

impl Visibility {
    pub fn key(&self) -> &str {
        match self {
            Visibility::ShowWhenSet(key) | Visibility::HideWhenSet(key) => key,
        }
    }

    /// The layout directive the form fragment embeds.
    pub fn expression(&self) -> String {
        match self {
            Visibility::ShowWhenSet(key) => format!("model.{}", key),
            Visibility::HideWhenSet(key) => format!("!model.{}", key),
        }
    }
}

/// An ordered, titled group of tabs with optional conditional visibility.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TabFieldset {
    title: String,
    tabs: Vec<Tab>,
    condition: String,
    condition_flip: bool,
}

#[derive(Serialize)]
struct FieldsetFormContext<'a> {
    title: &'a str,
    condition_check: bool,
    condition: &'a str,
    condition_flip: bool,
    tabs: Vec<String>,
}

#[derive(Serialize)]
struct FieldsetSchemaContext<'a> {
    title: &'a str,
    tabs: Vec<String>,
}

impl TabFieldset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Gates visibility on whether `key` has a value.
    ///
    /// With `default_hide == false` the fieldset stays hidden until `key` is set; with `true`
    /// it is shown until `key` is set. An empty `key` disables the check.
    pub fn set_condition(&mut self, key: impl Into<String>, default_hide: bool) {
        self.condition = key.into();
        self.condition_flip = default_hide;
    }

    /// Appends a tab after the existing ones.
    pub fn add_tab(&mut self, tab: Tab) {
        self.tabs.push(tab);
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.set_title(title);
        self
    }

    pub fn with_condition(mut self, key: impl Into<String>, default_hide: bool) -> Self {
        self.set_condition(key, default_hide);
        self
    }

    pub fn with_tab(mut self, tab: Tab) -> Self {
        self.add_tab(tab);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// The active visibility rule, or `None` when the fieldset is always shown.
    pub fn condition(&self) -> Option<Visibility> {
        if self.condition.is_empty() {
            return None;
        }
        let key = self.condition.clone();
        Some(if self.condition_flip {
            Visibility::HideWhenSet(key)
        } else {
            Visibility::ShowWhenSet(key)
        })
    }
}

impl Element for TabFieldset {
    fn try_form_with(&self, templates: &Templates) -> Result<String, RenderError> {
        let context = FieldsetFormContext {
            title: &self.title,
            condition_check: !self.condition.is_empty(),
            condition: &self.condition,
            condition_flip: self.condition_flip,
            tabs: self.tabs.iter().map(|tab| tab.form_with(templates)).collect(),
        };
        templates.render(TAB_FIELDSET_FORM, &context)
    }

    fn try_schema_with(&self, templates: &Templates) -> Result<String, RenderError> {
        let context = FieldsetSchemaContext {
            title: &self.title,
            tabs: self
                .tabs
                .iter()
                .map(|tab| tab.schema_with(templates))
                .collect(),
        };
        templates.render(TAB_FIELDSET_SCHEMA, &context)
    }

    fn inputs(&self) -> Vec<Input> {
        self.tabs.iter().flat_map(Element::inputs).collect()
    }

    fn render_errors(&self, templates: &Templates) -> Vec<RenderError> {
        let mut errors: Vec<RenderError> = self
            .tabs
            .iter()
            .flat_map(|tab| tab.render_errors(templates))
            .collect();
        errors.extend(own_render_errors(self, templates));
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn settings() -> TabFieldset {
        TabFieldset::new()
            .with_title("Settings")
            .with_tab(
                Tab::new()
                    .with_title("General")
                    .with_element(Input::text("name", "Name")),
            )
            .with_tab(
                Tab::new()
                    .with_title("Advanced")
                    .with_element(Input::number("retries", "Retries")),
            )
    }

    fn form_json(fieldset: &TabFieldset) -> Value {
        serde_json::from_str(&fieldset.form()).unwrap()
    }

    #[test]
    fn test_new_fieldset_is_unconditional() {
        let fieldset = TabFieldset::new();
        assert_eq!(fieldset.title(), "");
        assert!(fieldset.tabs().is_empty());
        assert_eq!(fieldset.condition(), None);
    }

    #[test]
    fn test_form_structure() {
        let form = form_json(&settings());

        assert_eq!(form["type"], "fieldset");
        assert_eq!(form["title"], "Settings");
        assert_eq!(form["items"][0]["type"], "tabs");
        let tabs = &form["items"][0]["tabs"];
        assert_eq!(tabs[0]["title"], "General");
        assert_eq!(tabs[1]["title"], "Advanced");
        assert_eq!(tabs[1]["items"][0]["key"], "retries");
    }

    #[test]
    fn test_schema_structure() {
        let schema: Value = serde_json::from_str(&settings().schema()).unwrap();

        assert_eq!(schema["title"], "Settings");
        assert_eq!(schema["allOf"][0]["title"], "General");
        assert_eq!(schema["allOf"][1]["title"], "Advanced");
    }

    #[test]
    fn test_condition_show_when_set() {
        let fieldset = settings().with_condition("foo", false);

        assert_eq!(
            fieldset.condition(),
            Some(Visibility::ShowWhenSet("foo".into()))
        );
        assert_eq!(form_json(&fieldset)["condition"], "model.foo");
    }

    #[test]
    fn test_condition_hide_when_set() {
        let fieldset = settings().with_condition("foo", true);

        assert_eq!(
            fieldset.condition(),
            Some(Visibility::HideWhenSet("foo".into()))
        );
        assert_eq!(form_json(&fieldset)["condition"], "!model.foo");
    }

    #[test]
    fn test_flip_changes_directive() {
        let shown = settings().with_condition("foo", false).form();
        let hidden = settings().with_condition("foo", true).form();
        assert_ne!(shown, hidden);
    }

    #[test]
    fn test_empty_condition_disables_check() {
        for flip in [false, true] {
            let fieldset = settings().with_condition("", flip);
            assert_eq!(fieldset.condition(), None);
            assert!(form_json(&fieldset).get("condition").is_none());
            assert_eq!(fieldset.form(), settings().form());
        }
    }

    #[test]
    fn test_schema_never_has_condition() {
        let fieldset = settings().with_condition("foo", false);
        let schema = fieldset.schema();

        assert!(!schema.contains("condition"));
        assert!(!schema.contains("model.foo"));
        assert_eq!(schema, settings().schema());
    }

    #[test]
    fn test_set_condition_replaces_previous() {
        let mut fieldset = settings();
        fieldset.set_condition("first", true);
        fieldset.set_condition("second", false);

        assert_eq!(form_json(&fieldset)["condition"], "model.second");
    }

    #[test]
    fn test_visibility_expression_matches_form() {
        let fieldset = settings().with_condition("enabled", true);
        let expected = fieldset.condition().unwrap();

        assert_eq!(expected.key(), "enabled");
        assert_eq!(form_json(&fieldset)["condition"], json!(expected.expression()));
    }

    #[test]
    fn test_inputs_concatenates_tabs() {
        let fieldset = settings();
        let mut expected = fieldset.tabs()[0].inputs();
        expected.extend(fieldset.tabs()[1].inputs());

        assert_eq!(fieldset.inputs(), expected);
        assert_eq!(fieldset.inputs().len(), 2);
    }

    #[test]
    fn test_added_tab_is_a_copy() {
        let mut tab = Tab::new().with_title("General");
        let mut fieldset = TabFieldset::new();
        fieldset.add_tab(tab.clone());

        tab.add_element(Input::text("late", "Late"));

        assert!(fieldset.inputs().is_empty());
        assert!(fieldset.tabs()[0].is_empty());
    }

    #[test]
    fn test_serialization_is_idempotent() {
        let fieldset = settings().with_condition("foo", false);
        assert_eq!(fieldset.form(), fieldset.form());
        assert_eq!(fieldset.schema(), fieldset.schema());
        assert_eq!(fieldset.inputs(), fieldset.inputs());
    }
}
