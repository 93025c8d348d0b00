//! `Json<T>` plus `validator` checks for request bodies
//!
//! A body that is not JSON, or does not match the DTO shape, is a 400.
//! A well-formed body that breaks a `#[validate]` rule (an empty product
//! name, say) is a 422. Both carry an [`ErrorResponse`].

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use super::ErrorResponse;

/// Request body that has been deserialized and passed `Validate`.
pub struct ValidatedJson<T>(pub T);

pub enum BodyRejection {
    Malformed(JsonRejection),
    Invalid(ValidationErrors),
}

/// `field: message` pairs sorted by field, joined with `; `.
fn describe(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let parts: Vec<String> = fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => format!("{field}: {msg}"),
                None => format!("{field}: {}", e.code),
            })
        })
        .collect();

    if parts.is_empty() {
        "request body failed validation".to_string()
    } else {
        parts.join("; ")
    }
}

impl IntoResponse for BodyRejection {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Malformed(rejection) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid JSON: {}", rejection.body_text()),
            ),
            Self::Invalid(errors) => (StatusCode::UNPROCESSABLE_ENTITY, describe(&errors)),
        };
        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = BodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<T>::from_request(req, state)
            .await
            .map_err(BodyRejection::Malformed)?;
        body.validate().map_err(BodyRejection::Invalid)?;
        Ok(ValidatedJson(body))
    }
}
