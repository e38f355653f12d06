use axum::{
    extract::{rejection::JsonRejection, Extension, Path, State},
    Json,
};

use crate::application::dtos::post_dto::{CreatePostDto, PostDto};
use crate::application::ports::post_ports::CreatePostRequest;
use crate::common::di::AppState;
use crate::common::errors::AppError;
use crate::interfaces::api::presenters::PostPresenter;
use crate::interfaces::middleware::auth::CurrentUser;

use super::{parse_body, parse_positive_id};

/// Publica un post; el autor es siempre el usuario del token
pub async fn create_post(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    body: Result<Json<CreatePostDto>, JsonRejection>,
) -> Result<PostPresenter, AppError> {
    let dto = parse_body(body)?;

    let mut presenter = PostPresenter::new();
    state
        .applications
        .create_post
        .execute(CreatePostRequest {
            user_id: current_user.id,
            message: dto.message,
        })
        .await
        .present(&mut presenter);

    Ok(presenter)
}

pub async fn list_posts(State(state): State<AppState>) -> Result<Json<Vec<PostDto>>, AppError> {
    Ok(Json(state.applications.post_queries.list_posts().await?))
}

pub async fn list_user_posts(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<PostDto>>, AppError> {
    let user_id = parse_positive_id(&id, "invalid user id")?;
    Ok(Json(state.applications.post_queries.list_posts_by_user(user_id).await?))
}
