use std::fmt;

use serde::{Deserialize, Serialize};

use super::ValueObject;
use crate::domain::errors::ValidationError;

/// Dirección de email con forma mínima `local@dominio.tld`
///
/// No se normaliza nada (ni mayúsculas ni espacios): el valor se guarda tal
/// cual llegó si pasa la validación.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        Self::validate(value.as_str())?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl ValueObject for Email {
    type Value = str;

    fn validate(value: &str) -> Result<(), ValidationError> {
        let invalid = || ValidationError::InvalidEmail(value.to_string());

        if value.chars().any(char::is_whitespace) {
            return Err(invalid());
        }

        let (local, domain) = value.split_once('@').ok_or_else(invalid)?;
        if local.is_empty() || domain.contains('@') {
            return Err(invalid());
        }

        // El dominio necesita un punto con algo a cada lado
        let has_tld = domain
            .char_indices()
            .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len());
        if !has_tld {
            return Err(invalid());
        }

        Ok(())
    }

    fn value(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_addresses() {
        for raw in ["foo", "foo@", "a b@c.com", "@b.co", "a@b", "a@.co", "a@b.", "a@b@c.co", ""] {
            assert_eq!(
                Email::new(raw),
                Err(ValidationError::InvalidEmail(raw.to_string())),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn accepts_minimal_address() {
        let email = Email::new("a@b.co").unwrap();
        assert_eq!(email.value(), "a@b.co");
    }

    #[test]
    fn accepts_subdomains_without_normalizing() {
        let email = Email::new("Alice.Smith@Mail.Example.com").unwrap();
        assert_eq!(email.as_str(), "Alice.Smith@Mail.Example.com");
    }

    #[test]
    fn error_message_cites_offending_value() {
        let err = Email::new("foo@").unwrap_err();
        assert_eq!(err.to_string(), "Invalid Email: foo@");
    }

    #[test]
    fn equality_is_by_value() {
        assert_eq!(Email::new("a@b.co").unwrap(), Email::new("a@b.co").unwrap());
        assert_ne!(Email::new("a@b.co").unwrap(), Email::new("A@b.co").unwrap());
    }

    #[test]
    fn deserialization_runs_validation() {
        let ok: Email = serde_json::from_str("\"alice@example.com\"").unwrap();
        assert_eq!(ok.as_str(), "alice@example.com");
        assert!(serde_json::from_str::<Email>("\"alice\"").is_err());
    }
}
