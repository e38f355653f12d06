use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::common::errors::{AppError, DomainError};

pub mod user_presenter;
pub mod post_presenter;
pub mod favorite_presenter;

pub use user_presenter::UserPresenter;
pub use post_presenter::PostPresenter;
pub use favorite_presenter::FavoritePresenter;

// Los fallos de caso de uso se devuelven siempre como 400 con el mensaje
fn failure_response(error: &DomainError) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({ "error": error.message })),
    )
        .into_response()
}

fn missing_response() -> Response {
    tracing::error!("El caso de uso terminó sin presentar respuesta");
    AppError::internal_error("no response presented").into_response()
}
