//! JSON body extractor that reports problems as validation errors.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use todo_core::error::{CoreError, FieldError};
use validator::Validate;

use crate::error::AppError;

/// Deserializes a JSON body and runs its [`Validate`] rules.
///
/// Malformed JSON, a wrong content type or a field of the wrong JSON type
/// is reported as a 400 validation error on the `body` field instead of
/// axum's default 4xx rejection.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate().map_err(CoreError::from)?;
        Ok(Self(value))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Core(CoreError::Validation(vec![FieldError::new(
            "body",
            rejection.body_text(),
        )]))
    }
}
