use crate::domain::entities::user::User;
use crate::domain::errors::ValidationError;
use crate::domain::value_objects::Email;

/// Fábrica de usuarios para el alta
#[derive(Debug, Default, Clone, Copy)]
pub struct UserFactory;

impl UserFactory {
    pub fn new() -> Self {
        Self
    }

    /// Construye un usuario sin persistir (id = 0) a partir de datos crudos
    pub fn create_new(&self, name: &str, email: &str) -> Result<User, ValidationError> {
        User::new(name.to_string(), Email::new(email)?)
    }
}
