use std::sync::Arc;

use crate::application::dtos::user_dto::UserDto;
use crate::common::errors::DomainError;
use crate::domain::repositories::user_repository::UserRepository;

pub struct UserQueryService {
    user_repository: Arc<dyn UserRepository>,
}

impl UserQueryService {
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    pub async fn list_users(&self) -> Result<Vec<UserDto>, DomainError> {
        let users = self.user_repository.find_all().await?;
        Ok(users.into_iter().map(UserDto::from).collect())
    }
}
