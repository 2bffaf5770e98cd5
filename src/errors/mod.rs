use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use serde::Serialize;

use crate::db::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Store Error: {0}")]
    Store(#[from] StoreError),
    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Store(_) | AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::NotFound => HttpResponse::NotFound().finish(),
            AppError::BadRequest(msg) => HttpResponse::BadRequest().json(msg),
            AppError::Store(err) => {
                error!("Store failure: {}", err);
                HttpResponse::InternalServerError().json(ErrorResponse { error: "Database error".to_owned() })
            }
            AppError::InternalServerError(msg) => {
                error!("Internal failure: {}", msg);
                HttpResponse::InternalServerError().json(ErrorResponse { error: msg.clone() })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn not_found_has_empty_body() {
        let response = AppError::NotFound.error_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = to_bytes(response.into_body()).await.expect("body");
        assert!(body.is_empty());
    }

    #[actix_web::test]
    async fn bad_request_carries_message_as_json_string() {
        let response = AppError::BadRequest("No file uploaded.".to_owned()).error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = to_bytes(response.into_body()).await.expect("body");
        assert_eq!(&body[..], br#""No file uploaded.""#);
    }

    #[test]
    fn store_failures_map_to_server_error() {
        let err = AppError::from(StoreError::Database(sqlx::Error::PoolTimedOut));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
