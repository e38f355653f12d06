use axum::{
    extract::{rejection::JsonRejection, Extension, Path, State},
    Json,
};

use crate::application::dtos::favorite_dto::{FavoriteCountDto, ToggleFavoriteDto, UserFavoritesDto};
use crate::application::ports::favorite_ports::ToggleFavoriteRequest;
use crate::common::di::AppState;
use crate::common::errors::AppError;
use crate::interfaces::api::presenters::FavoritePresenter;
use crate::interfaces::middleware::auth::CurrentUser;

use super::{parse_body, parse_positive_id, INVALID_REQUEST};

pub async fn toggle_favorite(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    body: Result<Json<ToggleFavoriteDto>, JsonRejection>,
) -> Result<FavoritePresenter, AppError> {
    let dto = parse_body(body)?;
    if dto.post_id <= 0 {
        return Err(AppError::bad_request(INVALID_REQUEST));
    }

    let mut presenter = FavoritePresenter::new();
    state
        .applications
        .toggle_favorite
        .execute(ToggleFavoriteRequest {
            user_id: current_user.id,
            post_id: dto.post_id,
        })
        .await
        .present(&mut presenter);

    Ok(presenter)
}

pub async fn count_post_favorites(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<FavoriteCountDto>, AppError> {
    let post_id = parse_positive_id(&id, "invalid post id")?;
    Ok(Json(state.applications.favorite_queries.count_by_post(post_id).await?))
}

pub async fn list_user_favorites(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserFavoritesDto>, AppError> {
    let user_id = parse_positive_id(&id, "invalid user id")?;
    Ok(Json(state.applications.favorite_queries.list_by_user(user_id).await?))
}
