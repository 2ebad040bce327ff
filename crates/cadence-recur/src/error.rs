use thiserror::Error;

/// Rule validation errors
#[derive(Error, Debug)]
pub enum RuleError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error(transparent)]
    CoreError(#[from] cadence_core::error::CoreError),
}

pub type RuleResult<T> = std::result::Result<T, RuleError>;
