use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::application::dtos::user_dto::UserDto;
use crate::application::ports::user_ports::CreateUserRequest;
use crate::common::di::AppState;
use crate::common::errors::AppError;
use crate::interfaces::api::presenters::UserPresenter;

use super::parse_body;

pub async fn create_user(
    State(state): State<AppState>,
    body: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<UserPresenter, AppError> {
    let request = parse_body(body)?;

    let mut presenter = UserPresenter::new();
    state
        .applications
        .create_user
        .execute(request)
        .await
        .present(&mut presenter);

    Ok(presenter)
}

pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserDto>>, AppError> {
    let users = state.applications.user_queries.list_users().await?;
    Ok(Json(users))
}
