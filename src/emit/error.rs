//! Error types for emission.

use thiserror::Error;

use crate::model::ModelError;

/// Errors that abort a rendering request.
///
/// Constructs the target syntax cannot express never produce an error; they
/// are degraded in place. Only a broken model is fatal.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// A node refers to an entity that is not in the model.
    #[error("invalid node at `{path}`: {source}")]
    InvalidNode {
        #[source]
        source: ModelError,
        /// Names of the enclosing nodes, outermost first.
        path: String,
    },
}

impl RenderError {
    /// Create an invalid-node error.
    pub fn invalid_node(source: ModelError, path: impl Into<String>) -> Self {
        Self::InvalidNode {
            source,
            path: path.into(),
        }
    }

    /// The underlying model error.
    pub fn model_error(&self) -> &ModelError {
        match self {
            Self::InvalidNode { source, .. } => source,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Self::InvalidNode { path, .. } => path,
        }
    }

    /// Fill in the breadcrumb path unless one is already recorded.
    pub(crate) fn with_path(self, breadcrumbs: &[String]) -> Self {
        match self {
            Self::InvalidNode { source, path } if path.is_empty() => {
                Self::invalid_node(source, breadcrumbs.join(" > "))
            }
            other => other,
        }
    }
}

impl From<ModelError> for RenderError {
    fn from(source: ModelError) -> Self {
        Self::invalid_node(source, String::new())
    }
}
