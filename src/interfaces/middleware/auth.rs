use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::common::di::AppState;
use crate::domain::entities::user::UserId;
use crate::domain::services::token_service::AuthError;

const BEARER: &str = "Bearer";

// Extensión para almacenar datos del usuario autenticado
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: UserId,
    pub email: String,
}

// Motivos de rechazo del guard; todos se responden igual al cliente
#[derive(Debug, thiserror::Error)]
pub enum AuthGuardError {
    #[error("Token no proporcionado")]
    TokenNotProvided,

    #[error(transparent)]
    Token(#[from] AuthError),

    #[error("Subject inválido: {0}")]
    InvalidSubject(String),
}

impl IntoResponse for AuthGuardError {
    fn into_response(self) -> Response {
        tracing::debug!("Petición rechazada por el guard de autenticación: {}", self);

        let body = axum::Json(serde_json::json!({
            "error": "unauthorized"
        }));

        (StatusCode::UNAUTHORIZED, body).into_response()
    }
}

/// Quita un prefijo `Bearer ` (sin distinguir mayúsculas) seguido de espacios.
/// Sin prefijo, el valor completo se trata como token.
pub fn extract_bearer_token(header_value: &str) -> &str {
    let Some(prefix) = header_value.get(..BEARER.len()) else {
        return header_value;
    };
    if !prefix.eq_ignore_ascii_case(BEARER) {
        return header_value;
    }

    let rest = &header_value[BEARER.len()..];
    let token = rest.trim_start();
    if token.len() < rest.len() {
        token
    } else {
        header_value
    }
}

fn parse_subject(sub: &str) -> Result<UserId, AuthGuardError> {
    sub.parse::<UserId>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AuthGuardError::InvalidSubject(sub.to_string()))
}

// Middleware de autenticación: verifica el token y expone CurrentUser y claims
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthGuardError> {
    let header_value = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(AuthGuardError::TokenNotProvided)?;

    let claims = state
        .auth
        .token_service
        .verify(extract_bearer_token(header_value))?;
    let id = parse_subject(&claims.sub)?;

    request.extensions_mut().insert(CurrentUser {
        id,
        email: claims.email.clone(),
    });
    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}
