use crate::error::SpringError;

#[test]
fn test_error_display() {
    let limit = SpringError::ResourceLimitExceeded {
        limit_name: "max_steps".to_string(),
        limit_value: "10".to_string(),
        actual_value: "11".to_string(),
        suggestion: "Raise the limit".to_string(),
    };
    assert_eq!(
        format!("{}", limit),
        "Resource limit exceeded: max_steps (limit 10, actual 11)"
    );
    assert_eq!(limit.limit_name(), Some("max_steps"));

    let invalid = SpringError::invalid_input("levels must be positive");
    assert_eq!(format!("{}", invalid), "Invalid input: levels must be positive");
    assert_eq!(invalid.limit_name(), None);
}

#[test]
fn test_error_is_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    assert_error(&SpringError::invalid_input("x"));
}
