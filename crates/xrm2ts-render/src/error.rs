//! Error types for code generation.
//!
//! [`GenerateError`] covers every fatal failure of a generation run. Local,
//! recoverable problems (a downgraded filter rule, a missing localized
//! label) never surface here.

use std::path::PathBuf;

use thiserror::Error;

use crate::template::SlugScope;

/// A fatal code-generation failure. Partial output is discarded.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The template file could not be read.
    #[error("template not found: {}", path.display())]
    TemplateNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The template is not a well-formed document.
    #[error("invalid template {origin}: {message}")]
    InvalidTemplate { origin: String, message: String },

    /// A slug names a property the active scope does not have.
    #[error("unknown {scope} property '{property}' in slug '{slug}'")]
    SlugResolution {
        slug: String,
        property: String,
        scope: SlugScope,
    },

    /// The caller raised the cancellation flag.
    #[error("generation cancelled before entity '{entity}'")]
    Cancelled { entity: String },
}

impl GenerateError {
    pub(crate) fn invalid_template(origin: impl Into<String>, message: impl ToString) -> Self {
        GenerateError::InvalidTemplate {
            origin: origin.into(),
            message: message.to_string(),
        }
    }
}

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, GenerateError>;
