use axum::extract::rejection::JsonRejection;
use axum::Json;

use crate::common::errors::AppError;

pub mod user_handler;
pub mod post_handler;
pub mod favorite_handler;
pub mod auth_handler;

pub const INVALID_REQUEST: &str = "invalid request";

/// Cuerpo JSON ausente o mal formado: 400 `{"error": "invalid request"}`
pub(crate) fn parse_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    body.map(|Json(value)| value).map_err(|rejection| {
        tracing::debug!("Cuerpo de petición rechazado: {}", rejection);
        AppError::bad_request(INVALID_REQUEST)
    })
}

/// Ids de ruta: enteros positivos
pub(crate) fn parse_positive_id(raw: &str, invalid_message: &'static str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::bad_request(invalid_message))
}
