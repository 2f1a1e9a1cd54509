//! Login credentials: the `logins` table and the login request body.

use serde::Deserialize;
use validator::Validate;

/// A stored credential pair.
///
/// The password is kept and compared in plaintext. This is a known weakness
/// inherited from the data the service was built against; hashing is out of
/// scope here.
#[derive(Debug, Clone)]
pub struct Login {
    pub id: i64,
    pub username: String,
    pub password: String,
}

impl Login {
    /// Plaintext equality against the supplied password.
    pub fn password_matches(&self, supplied: &str) -> bool {
        self.password == supplied
    }
}

/// Login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(
        required(message = "Username is required"),
        custom(function = "crate::validation::not_blank", message = "Username is required"),
        length(max = 50, message = "Username must be less than 50 characters")
    )]
    pub username: Option<String>,

    #[validate(
        required(message = "Password is required"),
        custom(function = "crate::validation::not_blank", message = "Password is required"),
        length(max = 50, message = "Password must be less than 50 characters")
    )]
    pub password: Option<String>,
}

impl LoginRequest {
    /// Borrow `(username, password)` after [`Validate::validate`] has passed.
    pub fn credentials(&self) -> (&str, &str) {
        (
            self.username.as_deref().unwrap_or_default(),
            self.password.as_deref().unwrap_or_default(),
        )
    }
}
