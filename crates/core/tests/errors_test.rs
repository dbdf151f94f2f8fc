use pretty_assertions::assert_eq;

use slotbook_core::errors::{BookingError, BookingResult};

#[test]
fn test_validation_error_message() {
    let err = BookingError::Validation("Duration must be between 15 and 360 minutes".to_string());
    assert_eq!(
        err.to_string(),
        "Validation error: Duration must be between 15 and 360 minutes"
    );
}

#[test]
fn test_invalid_filter_message() {
    let err = BookingError::InvalidFilter("not a service id: \"ten\"".to_string());
    assert_eq!(
        err.to_string(),
        "Invalid filter selection: not a service id: \"ten\""
    );
}

#[test]
fn test_auth_required_message() {
    assert_eq!(
        BookingError::AuthRequired.to_string(),
        "Authentication required"
    );
}

#[test]
fn test_backend_error_wraps_reports() {
    fn failing() -> BookingResult<()> {
        Err(eyre::eyre!("connection refused").into())
    }

    let err = failing().unwrap_err();
    assert!(matches!(err, BookingError::Backend(_)));
    assert_eq!(err.to_string(), "Backend error: connection refused");
}
