use thiserror::Error;

/// A failure to produce one fragment.
///
/// Elements never return this from `form()` / `schema()`: it is logged and the fragment
/// degrades to an empty string. The strict `try_*` methods and
/// [`crate::Element::render_errors`] expose it to callers that need to know.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("Template `{name}` failed to compile: {message}")]
    Compile { name: String, message: String },

    #[error("Template `{name}` failed to render: {message}")]
    Render { name: String, message: String },

    #[error("Unknown template: {0}")]
    UnknownTemplate(String),
}

impl RenderError {
    /// Name of the template the error came from.
    pub fn template(&self) -> &str {
        match self {
            RenderError::Compile { name, .. } | RenderError::Render { name, .. } => name,
            RenderError::UnknownTemplate(name) => name,
        }
    }
}

#[derive(Error, Debug)]
pub enum FormError {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("{} fragment(s) failed to render", .0.len())]
    Incomplete(Vec<RenderError>),

    #[error("Duplicate input key: {0}")]
    DuplicateKey(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FormError>;
