use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::application::dtos::OkDto;
use crate::application::ports::favorite_ports::FavoriteOutputPort;
use crate::application::ports::output_port::OutputPort;
use crate::common::errors::DomainError;

use super::{failure_response, missing_response};

/// 201 al añadir, 200 al quitar
#[derive(Default)]
pub struct FavoritePresenter {
    response: Option<Response>,
}

impl FavoritePresenter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OutputPort for FavoritePresenter {
    fn failure(&mut self, error: DomainError) {
        self.response = Some(failure_response(&error));
    }
}

impl FavoriteOutputPort for FavoritePresenter {
    fn success_add(&mut self) {
        self.response = Some((StatusCode::CREATED, Json(OkDto::ok())).into_response());
    }

    fn success_remove(&mut self) {
        self.response = Some((StatusCode::OK, Json(OkDto::ok())).into_response());
    }
}

impl IntoResponse for FavoritePresenter {
    fn into_response(self) -> Response {
        self.response.unwrap_or_else(missing_response)
    }
}
