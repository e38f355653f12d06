use crate::domain::entities::{Entity, UNPERSISTED_ID};
use crate::domain::errors::ValidationError;
use crate::domain::value_objects::Email;
use crate::impl_entity_identity;

pub type UserId = i64;

pub type UserResult<T> = Result<T, ValidationError>;

#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    name: String,
    email: Email,
}

impl User {
    /// Usuario nuevo, todavía sin id asignado
    pub fn new(name: String, email: Email) -> UserResult<Self> {
        Self::from_data(UNPERSISTED_ID, name, email)
    }

    // Crear desde valores existentes (para reconstrucción desde BD)
    pub fn from_data(id: UserId, name: String, email: Email) -> UserResult<Self> {
        Self::validate_name(&name)?;
        Ok(Self { id, name, email })
    }

    fn validate_name(name: &str) -> UserResult<()> {
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(())
    }

    // Getters
    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn is_persisted(&self) -> bool {
        self.id != UNPERSISTED_ID
    }

    // Renombrar usuario
    pub fn rename(&mut self, new_name: String) -> UserResult<()> {
        Self::validate_name(&new_name)?;
        self.name = new_name;
        Ok(())
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> UserId {
        self.id
    }
}

impl_entity_identity!(User);

#[cfg(test)]
mod tests {
    use super::*;

    fn email(raw: &str) -> Email {
        Email::new(raw).unwrap()
    }

    #[test]
    fn new_user_is_not_persisted() {
        let user = User::new("Alice".to_string(), email("alice@example.com")).unwrap();
        assert_eq!(user.id(), UNPERSISTED_ID);
        assert!(!user.is_persisted());
    }

    #[test]
    fn rejects_blank_name() {
        assert_eq!(
            User::new("   ".to_string(), email("alice@example.com")).unwrap_err(),
            ValidationError::EmptyName
        );
    }

    #[test]
    fn equality_is_by_identity_only() {
        let a = User::from_data(7, "Alice".to_string(), email("alice@example.com")).unwrap();
        let b = User::from_data(7, "Bob".to_string(), email("bob@example.com")).unwrap();
        let c = User::from_data(8, "Alice".to_string(), email("alice@example.com")).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn rename_revalidates() {
        let mut user = User::from_data(1, "Alice".to_string(), email("alice@example.com")).unwrap();

        user.rename("Alicia".to_string()).unwrap();
        assert_eq!(user.name(), "Alicia");

        assert!(user.rename(String::new()).is_err());
        assert_eq!(user.name(), "Alicia");
    }
}
