use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::application::dtos::post_dto::CreatePostResponse;
use crate::application::ports::output_port::OutputPort;
use crate::application::ports::post_ports::PostOutputPort;
use crate::common::errors::DomainError;

use super::{failure_response, missing_response};

#[derive(Default)]
pub struct PostPresenter {
    response: Option<Response>,
}

impl PostPresenter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OutputPort for PostPresenter {
    fn failure(&mut self, error: DomainError) {
        self.response = Some(failure_response(&error));
    }
}

impl PostOutputPort for PostPresenter {
    fn success_create_post(&mut self, response: CreatePostResponse) {
        self.response = Some((StatusCode::CREATED, Json(response)).into_response());
    }
}

impl IntoResponse for PostPresenter {
    fn into_response(self) -> Response {
        self.response.unwrap_or_else(missing_response)
    }
}
