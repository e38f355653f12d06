use crate::common::errors::DomainError;

/// Puerto de salida compartido por todos los casos de uso
///
/// Cada caso de uso amplía este trait con sus propios métodos de éxito.
pub trait OutputPort {
    fn failure(&mut self, error: DomainError);
}
