//! Errors raised by the planning core

use thiserror::Error;

/// Planning failures. A call either returns a complete result or one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanningError {
    /// A caller-supplied value is malformed or out of range
    #[error("Invalid input for {field}: {message}")]
    InvalidInput { field: &'static str, message: String },

    /// The vegetable template cannot support the requested computation
    #[error("Invalid template: {0}")]
    InvalidTemplate(String),
}

impl PlanningError {
    pub fn invalid_input(field: &'static str, message: impl Into<String>) -> Self {
        PlanningError::InvalidInput {
            field,
            message: message.into(),
        }
    }

    pub fn invalid_template(message: impl Into<String>) -> Self {
        PlanningError::InvalidTemplate(message.into())
    }
}

pub type PlanningResult<T> = Result<T, PlanningError>;
