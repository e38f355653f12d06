use serde::{Deserialize, Serialize};

use crate::domain::entities::post::{Post, PostId};
use crate::domain::entities::user::UserId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    pub id: PostId,
    pub user_id: UserId,
    pub message: String,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id(),
            user_id: post.user_id(),
            message: post.message().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePostResponse {
    pub post: PostDto,
}

/// Cuerpo de `POST /api/posts`; el autor sale del token
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePostDto {
    pub message: String,
}
