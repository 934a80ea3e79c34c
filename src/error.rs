//! Error responses for the HTTP layer.
//!
//! All failures are rendered as `{"error": "<message>", "code": "<CODE>"}`.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::debug;

use crate::arith::MathError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body did not deserialize into the route's payload shape.
    #[error(transparent)]
    InvalidRequest(#[from] JsonRejection),
    /// The payload was well-formed but the operation rejected its operands.
    #[error(transparent)]
    Math(#[from] MathError),
}

impl ApiError {
    /// Machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidRequest(_) => "INVALID_REQUEST",
            ApiError::Math(MathError::Overflow { .. }) => "OVERFLOW",
            ApiError::Math(MathError::EmptyOperands) => "EMPTY_OPERANDS",
            ApiError::Math(MathError::NegativeFactorial(_)) => "NEGATIVE_FACTORIAL",
            ApiError::Math(MathError::ZeroToNegativePower(_)) => "ZERO_TO_NEGATIVE_POWER",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            // 400 for malformed JSON, 415 for a missing content type, 422 for
            // shape/type mismatches.
            ApiError::InvalidRequest(rejection) => rejection.status(),
            ApiError::Math(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();
        let message = match &self {
            ApiError::InvalidRequest(rejection) => rejection.body_text(),
            ApiError::Math(e) => e.to_string(),
        };
        debug!("Rejected request ({status}, {code}): {message}");
        (status, Json(json!({"error": message, "code": code}))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_math_errors_are_unprocessable() {
        for e in [
            MathError::EmptyOperands,
            MathError::NegativeFactorial(-3),
            MathError::Overflow { op: "add" },
            MathError::ZeroToNegativePower(-2),
        ] {
            assert_eq!(
                ApiError::from(e).status(),
                StatusCode::UNPROCESSABLE_ENTITY
            );
        }
    }

    #[test]
    fn test_codes() {
        assert_eq!(ApiError::from(MathError::EmptyOperands).code(), "EMPTY_OPERANDS");
        assert_eq!(
            ApiError::from(MathError::NegativeFactorial(-1)).code(),
            "NEGATIVE_FACTORIAL"
        );
        assert_eq!(
            ApiError::from(MathError::Overflow { op: "multiply" }).code(),
            "OVERFLOW"
        );
        assert_eq!(
            ApiError::from(MathError::ZeroToNegativePower(-1)).code(),
            "ZERO_TO_NEGATIVE_POWER"
        );
    }
}
