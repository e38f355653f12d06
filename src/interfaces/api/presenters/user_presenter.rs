use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::application::dtos::user_dto::CreateUserResponse;
use crate::application::ports::output_port::OutputPort;
use crate::application::ports::user_ports::UserOutputPort;
use crate::common::errors::DomainError;

use super::{failure_response, missing_response};

/// Traduce el resultado de CreateUser a una respuesta HTTP
#[derive(Default)]
pub struct UserPresenter {
    response: Option<Response>,
}

impl UserPresenter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OutputPort for UserPresenter {
    fn failure(&mut self, error: DomainError) {
        self.response = Some(failure_response(&error));
    }
}

impl UserOutputPort for UserPresenter {
    fn success_create_user(&mut self, response: CreateUserResponse) {
        self.response = Some((StatusCode::CREATED, Json(response)).into_response());
    }
}

impl IntoResponse for UserPresenter {
    fn into_response(self) -> Response {
        self.response.unwrap_or_else(missing_response)
    }
}
