use serde::{Deserialize, Serialize};

pub mod user_dto;
pub mod post_dto;
pub mod favorite_dto;
pub mod auth_dto;

/// `{"ok": true}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OkDto {
    pub ok: bool,
}

impl OkDto {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}
