//! Request body extractor that reports failures in the API's error shape.

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use roster_common::error::{FieldErrors, RosterError};
use serde::de::DeserializeOwned;

/// Key used when a failure can't be pinned to one field.
const BODY_FIELD: &str = "body";

/// Drop-in for [`Json`] whose rejection is a [`RosterError::Validation`].
///
/// Only parsing happens here; handlers still call `validate_request`
/// themselves, after any lookups that must be reported first.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = RosterError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            tracing::debug!(error = %e, "Rejected request body");
            rejection_to_error(&e)
        })?;
        Ok(JsonBody(value))
    }
}

fn rejection_to_error(rejection: &JsonRejection) -> RosterError {
    let (field, message) = match rejection {
        JsonRejection::JsonDataError(e) => data_error_field(&e.body_text()),
        JsonRejection::JsonSyntaxError(_) => {
            (BODY_FIELD.to_string(), "Request body is not valid JSON".to_string())
        }
        JsonRejection::MissingJsonContentType(_) => (
            BODY_FIELD.to_string(),
            "Content-Type must be application/json".to_string(),
        ),
        other => (BODY_FIELD.to_string(), other.body_text()),
    };

    let mut fields = FieldErrors::new();
    fields.insert(field, vec![message]);
    RosterError::Validation { fields }
}

/// Pull the offending field out of a deserialization message of the form
/// `<preamble>: <path>: <reason>`. Falls back to the whole body.
fn data_error_field(text: &str) -> (String, String) {
    let path = text
        .split_once(": ")
        .and_then(|(_, rest)| rest.split_once(": "))
        .map(|(path, _)| path)
        .filter(|p| {
            !p.is_empty()
                && p != &"."
                && p.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
        });

    match path {
        Some(field) => (field.to_string(), format!("Invalid value for '{field}'")),
        None => (
            BODY_FIELD.to_string(),
            "Request body does not match the expected shape".to_string(),
        ),
    }
}
