use axum::{
    body::Bytes,
    http::Method,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use super::parse_body;
use crate::error::AppError;
use crate::models::LoginRequest;
use crate::service::LoginService;

pub const MISSING_CREDENTIALS: &str = "Usuario y contraseña requeridos";
pub const WRONG_CREDENTIALS: &str = "Usuario o contraseña incorrectos";

pub async fn login(
    service: &LoginService,
    method: Method,
    body: &Bytes,
) -> Result<Response, AppError> {
    if method != Method::POST {
        return Err(AppError::MethodNotAllowed {
            method,
            resource: "login".to_string(),
            allow: "POST",
        });
    }

    // An empty body is the same as a body without credentials.
    let request: LoginRequest = if body.iter().all(u8::is_ascii_whitespace) {
        LoginRequest::default()
    } else {
        parse_body(body)?
    };

    let Some((username, password)) = request.credentials() else {
        return Err(AppError::MissingCredentials(MISSING_CREDENTIALS.to_string()));
    };

    match service.authenticate(username, password).await? {
        Some(user) => Ok(Json(json!({
            "success": true,
            "user": user
        }))
        .into_response()),
        None => Err(AppError::InvalidCredentials(WRONG_CREDENTIALS.to_string())),
    }
}
