use serde::{Deserialize, Serialize};

use crate::application::dtos::user_dto::UserDto;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoginDto {
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponseDto {
    pub token: String,
    pub user: UserDto,
}

/// Datos del token en curso, tal como los devuelve `/api/auth/me`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeDto {
    pub sub: String,
    pub email: String,
}
