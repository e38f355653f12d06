pub mod email;

pub use email::Email;

use crate::domain::errors::ValidationError;

/// Contrato de objeto de valor
///
/// La identidad de un objeto de valor es su valor: se valida al construirse,
/// no cambia después, y dos instancias son iguales si sus valores lo son
/// (las implementaciones derivan `PartialEq` sobre el valor).
pub trait ValueObject: Sized + PartialEq {
    type Value: ?Sized + PartialEq;

    /// Regla de validación propia del tipo concreto
    fn validate(value: &Self::Value) -> Result<(), ValidationError>;

    /// Valor subyacente
    fn value(&self) -> &Self::Value;
}
