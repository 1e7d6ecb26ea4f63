use thiserror::Error;

pub type WizardResult<T> = Result<T, WizardError>;

/// Generic message shown when the AI suggestion call yields nothing usable.
pub const SUGGESTION_FAILURE_MESSAGE: &str = "Failed to generate AI suggestions. Please try again.";

#[derive(Error, Debug)]
pub enum WizardError {
    #[error("Validation error: missing required fields: {}", fields.join(", "))]
    Validation { fields: Vec<String> },

    #[error("{}", SUGGESTION_FAILURE_MESSAGE)]
    SuggestionGeneration,

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Draft {0} is published and can no longer be edited")]
    DraftNotMutable(String),

    #[error("Another {0} request is already in flight")]
    Busy(&'static str),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl WizardError {
    pub fn validation<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        WizardError::Validation {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// All variants are recoverable by the user; this only tells callers
    /// whether retrying the same call can make sense without an edit first.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            WizardError::SuggestionGeneration | WizardError::Persistence(_) | WizardError::Busy(_)
        )
    }
}
