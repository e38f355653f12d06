use crate::common::errors::DomainError;

/// Errores de validación lanzados al construir objetos de valor y entidades
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid Email: {0}")]
    InvalidEmail(String),

    #[error("Name is required")]
    EmptyName,

    #[error("Message is required")]
    EmptyMessage,

    #[error("Message must be {max} characters or less")]
    MessageTooLong { length: usize, max: usize },
}

impl ValidationError {
    /// Entidad a la que pertenece la regla que falló
    pub fn entity_type(&self) -> &'static str {
        match self {
            ValidationError::InvalidEmail(_) | ValidationError::EmptyName => "User",
            ValidationError::EmptyMessage | ValidationError::MessageTooLong { .. } => "Post",
        }
    }
}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        DomainError::validation_error(err.entity_type(), err.to_string())
    }
}
