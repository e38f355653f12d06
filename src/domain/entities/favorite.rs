use crate::domain::entities::post::PostId;
use crate::domain::entities::user::UserId;
use crate::domain::entities::{Entity, UNPERSISTED_ID};
use crate::impl_entity_identity;

pub type FavoriteId = i64;

/// Marca de favorito de un usuario sobre un post
///
/// Solo la crea y la destruye el caso de uso de toggle; nunca se actualiza.
#[derive(Debug, Clone)]
pub struct Favorite {
    id: FavoriteId,
    user_id: UserId,
    post_id: PostId,
}

impl Favorite {
    pub fn new(user_id: UserId, post_id: PostId) -> Self {
        Self::from_data(UNPERSISTED_ID, user_id, post_id)
    }

    pub fn from_data(id: FavoriteId, user_id: UserId, post_id: PostId) -> Self {
        Self { id, user_id, post_id }
    }

    pub fn id(&self) -> FavoriteId {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn post_id(&self) -> PostId {
        self.post_id
    }
}

impl Entity for Favorite {
    type Id = FavoriteId;

    fn id(&self) -> FavoriteId {
        self.id
    }
}

impl_entity_identity!(Favorite);
