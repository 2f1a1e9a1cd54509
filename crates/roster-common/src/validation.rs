//! Input validation utilities.
//!
//! Centralized validation helpers used across API routes.

use validator::{Validate, ValidationError};

use crate::error::{FieldErrors, RosterError};

/// Rejects empty and whitespace-only strings. Pair with `required` on
/// `Option` fields so absent and blank values report the same message.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// Validate a request body, returning a RosterError::Validation on failure.
pub fn validate_request<T: Validate>(body: &T) -> Result<(), RosterError> {
    body.validate().map_err(|e| RosterError::Validation {
        fields: collect_field_errors(&e),
    })
}

/// Group validation errors by field into human-readable messages.
fn collect_field_errors(errors: &validator::ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value for '{field}'"))
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LoginRequest;

    #[test]
    fn missing_fields_are_listed_by_name() {
        let body = LoginRequest {
            username: None,
            password: Some("x".repeat(51)),
        };
        let Err(RosterError::Validation { fields }) = validate_request(&body) else {
            panic!("expected validation error");
        };
        assert_eq!(fields["username"], vec!["Username is required".to_string()]);
        assert_eq!(
            fields["password"],
            vec!["Password must be less than 50 characters".to_string()]
        );
    }

    #[test]
    fn empty_string_reports_required_only() {
        let body = LoginRequest {
            username: Some(String::new()),
            password: Some("secret".into()),
        };
        let Err(RosterError::Validation { fields }) = validate_request(&body) else {
            panic!("expected validation error");
        };
        assert_eq!(fields["username"], vec!["Username is required".to_string()]);
        assert!(!fields.contains_key("password"));
    }

    #[test]
    fn valid_body_passes() {
        let body = LoginRequest {
            username: Some("alice".into()),
            password: Some("secret".into()),
        };
        assert!(validate_request(&body).is_ok());
    }
}
