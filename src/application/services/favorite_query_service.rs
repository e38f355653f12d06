use std::sync::Arc;

use crate::application::dtos::favorite_dto::{FavoriteCountDto, UserFavoritesDto};
use crate::common::errors::DomainError;
use crate::domain::entities::post::PostId;
use crate::domain::entities::user::UserId;
use crate::domain::repositories::favorite_repository::FavoriteRepository;

pub struct FavoriteQueryService {
    favorite_repository: Arc<dyn FavoriteRepository>,
}

impl FavoriteQueryService {
    pub fn new(favorite_repository: Arc<dyn FavoriteRepository>) -> Self {
        Self { favorite_repository }
    }

    pub async fn count_by_post(&self, post_id: PostId) -> Result<FavoriteCountDto, DomainError> {
        let count = self.favorite_repository.count_by_post(post_id).await?;
        Ok(FavoriteCountDto { post_id, count })
    }

    pub async fn list_by_user(&self, user_id: UserId) -> Result<UserFavoritesDto, DomainError> {
        let post_ids = self.favorite_repository.list_post_ids_by_user(user_id).await?;
        Ok(UserFavoritesDto { user_id, post_ids })
    }
}
