// src/shared/api/response.rs
use actix_web::{cookie::Cookie, http::StatusCode, HttpResponse};
use serde::Serialize;

use crate::shared::validation::{FieldViolation, ValidationErrors};

#[derive(Serialize, Clone, Debug)]
pub struct ApiError {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldViolation>>,
}

/// Builders for every HTTP answer the service produces.
pub struct ApiResponse;

impl ApiResponse {
    pub fn success<T: Serialize>(data: T) -> HttpResponse {
        HttpResponse::Ok().json(data)
    }

    pub fn created<T: Serialize>(data: T) -> HttpResponse {
        HttpResponse::Created().json(data)
    }

    pub fn success_with_cookie<T: Serialize>(data: T, cookie: Cookie<'static>) -> HttpResponse {
        HttpResponse::Ok().cookie(cookie).json(data)
    }

    pub fn created_with_cookie<T: Serialize>(data: T, cookie: Cookie<'static>) -> HttpResponse {
        HttpResponse::Created().cookie(cookie).json(data)
    }

    pub fn error(status: StatusCode, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiError {
            message: message.to_string(),
            errors: None,
        })
    }

    pub fn validation_failed(errors: ValidationErrors) -> HttpResponse {
        HttpResponse::BadRequest().json(ApiError {
            message: "Validation failed".to_string(),
            errors: Some(errors.into_inner()),
        })
    }

    pub fn bad_request(message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, message)
    }

    /// Uniqueness and idempotence violations share the 400 status with
    /// validation failures; the message tells them apart.
    pub fn conflict(message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, message)
    }

    pub fn unauthorized(message: &str) -> HttpResponse {
        Self::error(StatusCode::UNAUTHORIZED, message)
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
