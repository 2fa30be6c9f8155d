use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::domain::CalcError;

/// Error code reported for every rejected request.
pub const INVALID_INPUT: &str = "invalid_input";

/// Errors returned by the calculation endpoints.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Calc(#[from] CalcError),

    /// The JSON body could not be decoded.
    #[error("malformed request body: {0}")]
    Body(String),

    /// The query string could not be decoded.
    #[error("malformed query string: {0}")]
    Query(String),
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub field: String,
    pub message: String,
}

impl ApiError {
    fn field(&self) -> &str {
        match self {
            ApiError::Calc(err) => err.field(),
            ApiError::Body(_) => "body",
            ApiError::Query(_) => "query",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        debug!(field = self.field(), error = %self, "rejected calculation request");

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: INVALID_INPUT.to_string(),
            field: self.field().to_string(),
            message: self.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_error_is_bad_request() {
        assert_eq!(
            ApiError::Calc(CalcError::invalid("odds", "bad")).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Body("eof".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Query("bad".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn field_comes_from_calc_error() {
        let err = ApiError::from(CalcError::invalid("bets[0].odds", "too low"));
        assert_eq!(err.field(), "bets[0].odds");
        assert_eq!(err.to_string(), "invalid bets[0].odds: too low");
        assert_eq!(ApiError::Body(String::new()).field(), "body");
    }
}
