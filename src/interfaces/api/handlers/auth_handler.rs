use axum::{
    extract::{rejection::JsonRejection, Extension, State},
    Json,
};

use crate::application::dtos::auth_dto::{AuthResponseDto, LoginDto, MeDto};
use crate::application::dtos::OkDto;
use crate::common::di::AppState;
use crate::common::errors::AppError;
use crate::domain::services::token_service::TokenClaims;

use super::parse_body;

pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginDto>, JsonRejection>,
) -> Result<Json<AuthResponseDto>, AppError> {
    let dto = parse_body(body)?;

    match state.auth.auth_application_service.login(dto).await {
        Ok(response) => Ok(Json(response)),
        Err(err) => {
            tracing::info!("Login rechazado: {}", err);
            Err(err.into())
        }
    }
}

// JWT sin estado en servidor: el cliente descarta el token
pub async fn logout(State(state): State<AppState>) -> Json<OkDto> {
    Json(state.auth.auth_application_service.logout())
}

pub async fn me(
    State(state): State<AppState>,
    Extension(claims): Extension<TokenClaims>,
) -> Json<MeDto> {
    Json(state.auth.auth_application_service.me(&claims))
}
