//! `ValidatedJson` extractor deserializes a JSON body and runs its
//! `validator` rules.

use std::collections::BTreeMap;

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use eventhub_core::error::AppError;

use crate::error::ApiError;

/// Message used for every validation failure; per-field messages go in `details`.
pub const INVALID_DATA: &str = "The given data was invalid.";

/// JSON body that passed validation.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;

        value.validate().map_err(validation_error)?;
        Ok(Self(value))
    }
}

/// Converts validator output into a `Validation` error with per-field messages.
pub fn validation_error(errors: ValidationErrors) -> AppError {
    let fields: BTreeMap<String, Vec<String>> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let field = field.to_string();
            let messages = errs
                .iter()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("The {field} field is invalid."),
                })
                .collect();
            (field, messages)
        })
        .collect();

    AppError::validation(INVALID_DATA).with_details(serde_json::json!(fields))
}
