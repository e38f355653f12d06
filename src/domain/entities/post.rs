use crate::domain::entities::user::UserId;
use crate::domain::entities::{Entity, UNPERSISTED_ID};
use crate::domain::errors::ValidationError;
use crate::impl_entity_identity;

pub type PostId = i64;

/// Longitud máxima de un mensaje, en caracteres
pub const MAX_MESSAGE_LENGTH: usize = 280;

pub type PostResult<T> = Result<T, ValidationError>;

#[derive(Debug, Clone)]
pub struct Post {
    id: PostId,
    user_id: UserId,
    message: String,
}

impl Post {
    pub fn new(user_id: UserId, message: String) -> PostResult<Self> {
        Self::from_data(UNPERSISTED_ID, user_id, message)
    }

    pub fn from_data(id: PostId, user_id: UserId, message: String) -> PostResult<Self> {
        Self::validate_message(&message)?;
        Ok(Self { id, user_id, message })
    }

    /// Un mensaje tiene entre 1 y 280 caracteres (escalares Unicode)
    pub fn validate_message(message: &str) -> PostResult<()> {
        if message.is_empty() {
            return Err(ValidationError::EmptyMessage);
        }

        let length = message.chars().count();
        if length > MAX_MESSAGE_LENGTH {
            return Err(ValidationError::MessageTooLong {
                length,
                max: MAX_MESSAGE_LENGTH,
            });
        }

        Ok(())
    }

    pub fn id(&self) -> PostId {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_persisted(&self) -> bool {
        self.id != UNPERSISTED_ID
    }

    pub fn update_message(&mut self, new_message: String) -> PostResult<()> {
        Self::validate_message(&new_message)?;
        self.message = new_message;
        Ok(())
    }
}

impl Entity for Post {
    type Id = PostId;

    fn id(&self) -> PostId {
        self.id
    }
}

impl_entity_identity!(Post);
