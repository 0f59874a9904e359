use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::shopping::errors::BuyError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for BuyError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            BuyError::InsufficientStock { .. } => (
                StatusCode::CONFLICT,
                Json(ErrorResponse::new(
                    "InsufficientStock",
                    "shopping.insufficient_stock",
                )),
            ),
        }
    }
}
