//! Leaf inputs: the only elements that carry data.
//!
//! An [`Input`] renders itself through the `input_form` and `input_schema` templates, using its
//! own serialized form as the template context. The `kind` tag doubles as the layout `type`.

use crate::element::Element;
use crate::error::RenderError;
use crate::templates::{Templates, INPUT_FORM, INPUT_SCHEMA};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Input {
    key: String,
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    required: bool,
    #[serde(flatten)]
    kind: InputKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputKind {
    Text {
        #[serde(default)]
        placeholder: Option<String>,
        #[serde(default)]
        max_length: Option<u32>,
    },
    Textarea,
    Password,
    Number {
        #[serde(default)]
        minimum: Option<f64>,
        #[serde(default)]
        maximum: Option<f64>,
    },
    Checkbox {
        #[serde(default)]
        checked: bool,
    },
    Select {
        options: Vec<SelectOption>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

impl Input {
    pub fn new(key: impl Into<String>, title: impl Into<String>, kind: InputKind) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            description: None,
            required: false,
            kind,
        }
    }

    pub fn text(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(
            key,
            title,
            InputKind::Text {
                placeholder: None,
                max_length: None,
            },
        )
    }

    pub fn textarea(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(key, title, InputKind::Textarea)
    }

    pub fn password(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(key, title, InputKind::Password)
    }

    pub fn number(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(
            key,
            title,
            InputKind::Number {
                minimum: None,
                maximum: None,
            },
        )
    }

    pub fn checkbox(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(key, title, InputKind::Checkbox { checked: false })
    }

    pub fn select(
        key: impl Into<String>,
        title: impl Into<String>,
        options: Vec<SelectOption>,
    ) -> Self {
        Self::new(key, title, InputKind::Select { options })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Marks the input as required in the schema.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the placeholder text. No effect unless this is a text input.
    pub fn with_placeholder(mut self, text: impl Into<String>) -> Self {
        if let InputKind::Text { placeholder, .. } = &mut self.kind {
            *placeholder = Some(text.into());
        }
        self
    }

    /// Sets the maximum length. No effect unless this is a text input.
    pub fn with_max_length(mut self, length: u32) -> Self {
        if let InputKind::Text { max_length, .. } = &mut self.kind {
            *max_length = Some(length);
        }
        self
    }

    /// Sets the accepted range. No effect unless this is a number input.
    pub fn with_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        if let InputKind::Number { minimum, maximum } = &mut self.kind {
            *minimum = min;
            *maximum = max;
        }
        self
    }

    /// Sets the default state. No effect unless this is a checkbox.
    pub fn checked(mut self, value: bool) -> Self {
        if let InputKind::Checkbox { checked } = &mut self.kind {
            *checked = value;
        }
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn kind(&self) -> &InputKind {
        &self.kind
    }
}

impl Element for Input {
    fn try_form_with(&self, templates: &Templates) -> Result<String, RenderError> {
        templates.render(INPUT_FORM, self)
    }

    fn try_schema_with(&self, templates: &Templates) -> Result<String, RenderError> {
        templates.render(INPUT_SCHEMA, self)
    }

    fn inputs(&self) -> Vec<Input> {
        vec![self.clone()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn form_json(input: &Input) -> Value {
        serde_json::from_str(&input.form()).unwrap()
    }

    fn schema_json(input: &Input) -> Value {
        serde_json::from_str(&input.schema()).unwrap()
    }

    #[test]
    fn test_text_form() {
        let input = Input::text("name", "Name").with_placeholder("Jane Doe");
        assert_eq!(
            form_json(&input),
            json!({"key": "name", "type": "text", "title": "Name", "placeholder": "Jane Doe"})
        );
    }

    #[test]
    fn test_text_schema() {
        let input = Input::text("name", "Name").with_max_length(64);
        assert_eq!(
            schema_json(&input),
            json!({"properties": {"name": {"title": "Name", "type": "string", "maxLength": 64}}})
        );
    }

    #[test]
    fn test_required_is_a_schema_concern() {
        let input = Input::text("email", "Email").required();

        assert_eq!(schema_json(&input)["required"], json!(["email"]));
        assert!(form_json(&input).get("required").is_none());
    }

    #[test]
    fn test_description_appears_in_both_views() {
        let input = Input::textarea("bio", "Bio").with_description("A few words");

        assert_eq!(form_json(&input)["description"], "A few words");
        assert_eq!(
            schema_json(&input)["properties"]["bio"]["description"],
            "A few words"
        );
    }

    #[test]
    fn test_number_range() {
        let input = Input::number("age", "Age").with_range(Some(0.0), Some(130.0));
        let schema = schema_json(&input);

        assert_eq!(schema["properties"]["age"]["type"], "number");
        assert_eq!(schema["properties"]["age"]["minimum"], 0.0);
        assert_eq!(schema["properties"]["age"]["maximum"], 130.0);
    }

    #[test]
    fn test_number_without_range() {
        let schema = schema_json(&Input::number("age", "Age"));
        assert!(schema["properties"]["age"].get("minimum").is_none());
        assert!(schema["properties"]["age"].get("maximum").is_none());
    }

    #[test]
    fn test_checkbox_default() {
        let input = Input::checkbox("enabled", "Enabled").checked(true);

        assert_eq!(form_json(&input)["type"], "checkbox");
        assert_eq!(
            schema_json(&input)["properties"]["enabled"],
            json!({"title": "Enabled", "type": "boolean", "default": true})
        );
    }

    #[test]
    fn test_select_options() {
        let input = Input::select(
            "color",
            "Color",
            vec![SelectOption::new("r", "Red"), SelectOption::new("g", "Green")],
        );

        assert_eq!(
            form_json(&input)["titleMap"],
            json!([{"value": "r", "name": "Red"}, {"value": "g", "name": "Green"}])
        );
        assert_eq!(
            schema_json(&input)["properties"]["color"]["enum"],
            json!(["r", "g"])
        );
    }

    #[test]
    fn test_password_is_a_string() {
        let input = Input::password("secret", "Secret");
        assert_eq!(form_json(&input)["type"], "password");
        assert_eq!(schema_json(&input)["properties"]["secret"]["type"], "string");
    }

    #[test]
    fn test_titles_are_escaped() {
        let input = Input::text("quote", "Say \"hi\"");
        assert_eq!(form_json(&input)["title"], "Say \"hi\"");
    }

    #[test]
    fn test_kind_specific_setters_ignore_other_kinds() {
        let input = Input::checkbox("c", "C").with_max_length(3).with_placeholder("x");
        assert_eq!(input.kind(), &InputKind::Checkbox { checked: false });
    }

    #[test]
    fn test_inputs_is_self() {
        let input = Input::text("name", "Name");
        assert_eq!(input.inputs(), vec![input.clone()]);
    }

    #[test]
    fn test_deserialize_from_json() {
        let input: Input = serde_json::from_value(json!({
            "key": "count",
            "title": "Count",
            "kind": "number",
            "maximum": 10.0,
            "required": true
        }))
        .unwrap();

        assert_eq!(input.key(), "count");
        assert!(input.is_required());
        assert_eq!(
            input.kind(),
            &InputKind::Number {
                minimum: None,
                maximum: Some(10.0)
            }
        );
    }
}
