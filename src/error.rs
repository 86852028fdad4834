use axum::{
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::constants::API_NAME;

pub const INTERNAL_ERROR_MESSAGE: &str = "Error interno del servidor";
pub const NOT_FOUND_MESSAGE: &str = "Recurso no encontrado";
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Método no permitido";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid request body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing credentials: {0}")]
    MissingCredentials(String),

    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("Method {method} not allowed on {resource}")]
    MethodNotAllowed {
        method: Method,
        resource: String,
        allow: &'static str,
    },

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Database(_) | AppError::Json(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::MissingCredentials(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials(_) => StatusCode::UNAUTHORIZED,
            AppError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

fn internal(details: String) -> Response {
    let body = Json(json!({
        "error": INTERNAL_ERROR_MESSAGE,
        "details": details
    }));
    (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            AppError::Database(e) => {
                tracing::error!("{} Database error: {}", API_NAME, e);
                internal(e.to_string())
            }
            AppError::Json(e) => {
                tracing::error!("{} Malformed request body: {}", API_NAME, e);
                internal(e.to_string())
            }
            AppError::Internal(e) => {
                tracing::error!("{} Internal error: {:#}", API_NAME, e);
                internal(format!("{:#}", e))
            }
            AppError::MissingCredentials(message) | AppError::InvalidCredentials(message) => {
                tracing::warn!("{} Login rejected ({}): {}", API_NAME, status.as_u16(), message);
                let body = Json(json!({
                    "success": false,
                    "message": message
                }));
                (status, body).into_response()
            }
            AppError::MethodNotAllowed {
                method,
                resource,
                allow,
            } => {
                tracing::warn!("{} Method {} not allowed on {}", API_NAME, method, resource);
                let body = Json(json!({ "error": METHOD_NOT_ALLOWED_MESSAGE }));
                (status, [(header::ALLOW, allow)], body).into_response()
            }
            AppError::NotFound(path) => {
                tracing::warn!("{} Not found: {}", API_NAME, path);
                (status, NOT_FOUND_MESSAGE).into_response()
            }
        }
    }
}
