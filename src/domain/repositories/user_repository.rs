use async_trait::async_trait;

use crate::common::errors::DomainError;
use crate::domain::entities::user::{User, UserId};
use crate::domain::value_objects::Email;

#[derive(Debug, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User not found: {0}")]
    NotFound(String),

    #[error("User already exists: {0}")]
    AlreadyExists(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Stored user is invalid: {0}")]
    ValidationError(String),
}

pub type UserRepositoryResult<T> = Result<T, UserRepositoryError>;

// Conversión de UserRepositoryError a DomainError
impl From<UserRepositoryError> for DomainError {
    fn from(err: UserRepositoryError) -> Self {
        let message = err.to_string();
        match err {
            UserRepositoryError::NotFound(_) => DomainError::not_found("User", message),
            UserRepositoryError::AlreadyExists(_) => DomainError::already_exists("User", message),
            UserRepositoryError::DatabaseError(_) | UserRepositoryError::ValidationError(_) => {
                DomainError::persistence("User", message)
            }
        }
    }
}

/// Puerto de almacenamiento de usuarios
#[cfg_attr(any(test, feature = "test_utils"), mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Crea el usuario si su id es 0; si no, lo actualiza por id.
    /// Devuelve el usuario tal como quedó persistido (con id asignado).
    async fn save(&self, user: User) -> UserRepositoryResult<User>;

    /// Obtiene un usuario por ID
    async fn find_one_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>>;

    /// Lista todos los usuarios
    async fn find_all(&self) -> UserRepositoryResult<Vec<User>>;

    /// Obtiene un usuario por correo electrónico
    async fn find_by_email(&self, email: &Email) -> UserRepositoryResult<Option<User>>;
}
