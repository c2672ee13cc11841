use springboard::SpringError;

/// Format a SpringError for the terminal
pub fn format_error(error: &SpringError) -> String {
    match error {
        SpringError::ResourceLimitExceeded {
            limit_name,
            limit_value,
            actual_value,
            suggestion,
        } => {
            format!(
                "Resource limit exceeded: {}\n  Limit: {}\n  Actual: {}\n  {}",
                limit_name, limit_value, actual_value, suggestion
            )
        }
        SpringError::InvalidInput(msg) => format!("Invalid input: {}", msg),
    }
}
