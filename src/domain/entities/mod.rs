pub mod user;
pub mod post;
pub mod favorite;

use std::fmt::Debug;

/// Identificador que aún no ha asignado la persistencia
pub const UNPERSISTED_ID: i64 = 0;

/// Contrato de entidad: identidad estable, distinta de sus atributos
pub trait Entity {
    type Id: Copy + Eq + Debug;

    fn id(&self) -> Self::Id;
}

/// Implementa `PartialEq`/`Eq` comparando solo la identidad de la entidad
#[macro_export]
macro_rules! impl_entity_identity {
    ($entity:ty) => {
        impl PartialEq for $entity {
            fn eq(&self, other: &Self) -> bool {
                $crate::domain::entities::Entity::id(self) == $crate::domain::entities::Entity::id(other)
            }
        }

        impl Eq for $entity {}
    };
}
