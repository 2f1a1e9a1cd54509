//! User records managed by the protected CRUD endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A row of the `users` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Create / update request body.
#[derive(Debug, Deserialize, Validate)]
pub struct UserRequest {
    #[validate(
        required(message = "Name is required"),
        custom(function = "crate::validation::not_blank", message = "Name is required"),
        length(max = 50, message = "Name must be less than 50 characters")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "Email is required"),
        email(message = "Invalid email format")
    )]
    pub email: Option<String>,
}

impl UserRequest {
    /// Borrow the fields after [`Validate::validate`] has passed.
    pub fn fields(&self) -> (&str, &str) {
        (
            self.name.as_deref().unwrap_or_default(),
            self.email.as_deref().unwrap_or_default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_email() {
        let req = UserRequest {
            name: Some("Alice".into()),
            email: Some("not-an-email".into()),
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn name_messages() {
        let blank = UserRequest {
            name: Some(String::new()),
            email: Some("alice@example.com".into()),
        };
        let errors = blank.validate().unwrap_err();
        assert_eq!(
            errors.field_errors()["name"][0].message.as_deref(),
            Some("Name is required")
        );

        let long = UserRequest {
            name: Some("n".repeat(51)),
            email: Some("alice@example.com".into()),
        };
        let errors = long.validate().unwrap_err();
        assert_eq!(
            errors.field_errors()["name"][0].message.as_deref(),
            Some("Name must be less than 50 characters")
        );
    }

    #[test]
    fn accepts_well_formed_request() {
        let req = UserRequest {
            name: Some("Alice".into()),
            email: Some("alice@example.com".into()),
        };
        assert!(req.validate().is_ok());
        assert_eq!(req.fields(), ("Alice", "alice@example.com"));
    }
}
