use serde::{Deserialize, Serialize};

use crate::domain::entities::post::PostId;
use crate::domain::entities::user::UserId;

/// Cuerpo de `POST /api/favorites/toggle`
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleFavoriteDto {
    pub post_id: PostId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteCountDto {
    pub post_id: PostId,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFavoritesDto {
    pub user_id: UserId,
    pub post_ids: Vec<PostId>,
}
