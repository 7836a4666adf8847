//! # Schemaform Architecture
//!
//! Schemaform builds JSON Schema Form definitions out of a tree of small, nestable pieces. A
//! definition has two halves, and every piece contributes to both:
//!
//! - the **form**: how fields are laid out (fieldsets, tabs, widget types, visibility rules)
//! - the **schema**: what the data looks like (types, titles, constraints)
//!
//! ## The Tree
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  SchemaForm (document.rs)                                   │
//! │  - Root of a definition, strict assembly to one JSON value  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  TabFieldset (fieldset.rs)                                  │
//! │  - Titled group of tabs, optional conditional visibility    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Tab (tab.rs)                                               │
//! │  - Titled group of any Node: inputs, tabs, fieldsets        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Input (input.rs)                                           │
//! │  - Leaf: text, textarea, password, number, checkbox, select │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every level implements [`Element`]: `form()`, `schema()` and `inputs()`. Composites ask
//! their children for fragments in insertion order and pass them to a named template
//! ([`templates`]); `inputs()` flattens the leaves depth-first.
//!
//! ## Key Principle: Fail Soft by Default
//!
//! A fragment that fails to render is logged through `tracing` and replaced by an empty
//! string; parents skip empty children, so the rest of the form still renders. Code that
//! must not ship a partial form uses the strict side instead:
//! [`Element::render_errors`], the `try_*` methods, or [`SchemaForm::to_value`].
//!
//! ## Example
//!
//! ```rust
//! use schemaform::{Element, Input, Tab, TabFieldset};
//!
//! let mut settings = TabFieldset::new().with_title("Settings").with_tab(
//!     Tab::new()
//!         .with_title("General")
//!         .with_element(Input::text("name", "Name"))
//!         .with_element(Input::text("email", "Email")),
//! );
//! settings.set_condition("enabled", false);
//!
//! assert_eq!(settings.inputs().len(), 2);
//! assert!(settings.form().contains("model.enabled"));
//! assert!(!settings.schema().contains("condition"));
//! ```
//!
//! ## Module Overview
//!
//! - [`element`]: The `Element` capability and the `Node` variant set
//! - [`input`]: Leaf inputs
//! - [`tab`]: Tabs
//! - [`fieldset`]: Tab fieldsets and visibility rules
//! - [`document`]: Document root and strict assembly
//! - [`templates`]: Named fragment templates, compiled once
//! - [`config`]: Configuration (template overrides, output formatting)
//! - [`error`]: Error types

pub mod config;
pub mod document;
pub mod element;
pub mod error;
pub mod fieldset;
pub mod input;
pub mod tab;
pub mod templates;

pub use config::FormConfig;
pub use document::SchemaForm;
pub use element::{Element, Node};
pub use error::{FormError, RenderError, Result};
pub use fieldset::{TabFieldset, Visibility};
pub use input::{Input, InputKind, SelectOption};
pub use tab::Tab;
pub use templates::Templates;
