//! Request extractors.

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::AppError;

/// Query-string extractor that deserializes and validates `T`.
///
/// Missing or unparsable parameters and failed validation rules are both
/// rejected with an [`AppError`], so clients get a 422 with a JSON body
/// instead of axum's plain-text 400.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::InvalidParameter(rejection.body_text()))?;
        value.validate()?;
        Ok(ValidatedQuery(value))
    }
}
