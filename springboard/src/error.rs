use thiserror::Error;

/// Errors raised by the driver and the builders around it.
///
/// Errors produced by an algorithm's own steps are not wrapped in this type:
/// they travel as the algorithm's result value and come out of the driver
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpringError {
    /// A configured driver limit was hit before the run finished
    #[error("Resource limit exceeded: {limit_name} (limit {limit_value}, actual {actual_value})")]
    ResourceLimitExceeded {
        limit_name: String,
        limit_value: String,
        actual_value: String,
        suggestion: String,
    },

    /// Input that does not describe a valid problem
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl SpringError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        SpringError::InvalidInput(message.into())
    }

    /// Name of the exceeded limit, if this is a limit error
    pub fn limit_name(&self) -> Option<&str> {
        match self {
            SpringError::ResourceLimitExceeded { limit_name, .. } => Some(limit_name),
            SpringError::InvalidInput(_) => None,
        }
    }
}
