//! JSON body extractor with field validation.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

use mottu_core::error::AppError;

use crate::error::{ApiError, from_validation_errors};

/// A JSON body that has been deserialized and checked against its
/// `validator` constraints.
///
/// Malformed bodies and constraint violations are both rejected with 400.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;
        value
            .validate()
            .map_err(|errors| from_validation_errors(&errors))?;
        Ok(Self(value))
    }
}
