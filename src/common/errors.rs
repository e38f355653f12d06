use std::fmt::{Display, Formatter, Result as FmtResult};
use std::error::Error as StdError;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Tipos de errores comunes en toda la aplicación
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Entidad no encontrada
    NotFound,
    /// Entidad ya existe (email duplicado, favorito duplicado)
    AlreadyExists,
    /// Entrada inválida o validación fallida
    InvalidInput,
    /// Token ausente, inválido o expirado
    Unauthorized,
    /// Fallo devuelto por un adaptador de persistencia
    Persistence,
    /// Error interno del sistema
    InternalError,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ErrorKind::NotFound => write!(f, "Not Found"),
            ErrorKind::AlreadyExists => write!(f, "Already Exists"),
            ErrorKind::InvalidInput => write!(f, "Invalid Input"),
            ErrorKind::Unauthorized => write!(f, "Unauthorized"),
            ErrorKind::Persistence => write!(f, "Persistence Error"),
            ErrorKind::InternalError => write!(f, "Internal Error"),
        }
    }
}

/// Error base de dominio que proporciona contexto detallado
///
/// Los casos de uso reportan sus fallos con este tipo; el mensaje es lo que
/// acaba viendo el cliente, el `kind` queda disponible para quien quiera
/// distinguir la causa.
#[derive(Error, Debug)]
#[error("{kind}: {message}")]
pub struct DomainError {
    /// Tipo de error
    pub kind: ErrorKind,
    /// Tipo de entidad afectada (ej: "User", "Post")
    pub entity_type: &'static str,
    /// Mensaje descriptivo del error
    pub message: String,
    /// Error fuente (opcional)
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

pub type Result<T> = std::result::Result<T, DomainError>;

impl DomainError {
    /// Crea un nuevo error de dominio
    pub fn new<S: Into<String>>(
        kind: ErrorKind,
        entity_type: &'static str,
        message: S,
    ) -> Self {
        Self {
            kind,
            entity_type,
            message: message.into(),
            source: None,
        }
    }

    /// Crea un error de entidad no encontrada
    pub fn not_found<S: Into<String>>(entity_type: &'static str, message: S) -> Self {
        Self::new(ErrorKind::NotFound, entity_type, message)
    }

    /// Crea un error de entidad ya existente
    pub fn already_exists<S: Into<String>>(entity_type: &'static str, message: S) -> Self {
        Self::new(ErrorKind::AlreadyExists, entity_type, message)
    }

    /// Crea un error de validación
    pub fn validation_error<S: Into<String>>(entity_type: &'static str, message: S) -> Self {
        Self::new(ErrorKind::InvalidInput, entity_type, message)
    }

    /// Crea un error de autenticación
    pub fn unauthorized<S: Into<String>>(entity_type: &'static str, message: S) -> Self {
        Self::new(ErrorKind::Unauthorized, entity_type, message)
    }

    /// Crea un error de persistencia
    pub fn persistence<S: Into<String>>(entity_type: &'static str, message: S) -> Self {
        Self::new(ErrorKind::Persistence, entity_type, message)
    }

    /// Crea un error interno
    pub fn internal_error<S: Into<String>>(entity_type: &'static str, message: S) -> Self {
        Self::new(ErrorKind::InternalError, entity_type, message)
    }

    /// Establece el error fuente
    pub fn with_source<E: StdError + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

/// Error de la capa HTTP
///
/// Lo usan los endpoints que no pasan por un presenter (consultas y auth).
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new<S: Into<String>>(status: StatusCode, message: S) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized<S: Into<String>>(message: S) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn internal_error<S: Into<String>>(message: S) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        let status = match err.kind {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::AlreadyExists => StatusCode::CONFLICT,
            ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
            ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorKind::Persistence | ErrorKind::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        Self::new(status, err.message)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_display_includes_kind_and_message() {
        let err = DomainError::already_exists("User", "Email already in use");
        assert_eq!(err.to_string(), "Already Exists: Email already in use");
        assert_eq!(err.message, "Email already in use");
    }

    #[test]
    fn app_error_status_follows_error_kind() {
        let cases = [
            (DomainError::not_found("Post", "missing"), StatusCode::NOT_FOUND),
            (DomainError::already_exists("User", "dup"), StatusCode::CONFLICT),
            (DomainError::validation_error("Post", "bad"), StatusCode::BAD_REQUEST),
            (DomainError::unauthorized("Auth", "no"), StatusCode::UNAUTHORIZED),
            (DomainError::persistence("Favorite", "db"), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, status) in cases {
            assert_eq!(AppError::from(err).status, status);
        }
    }
}
