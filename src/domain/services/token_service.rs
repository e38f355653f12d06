use std::fmt;

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::common::errors::DomainError;

/// Duración usada cuando la expresión de expiración no se puede interpretar
pub const DEFAULT_EXPIRY_SECS: i64 = 60 * 60 * 24 * 7;

/**
 * JWT claims structure for authentication tokens.
 *
 * Wire shape: `{sub, email, iat, exp}` with epoch seconds. The token is
 * self-contained; the server keeps no session for it.
 */
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject identifier - contains the user ID
    pub sub: String,

    /// User email
    pub email: String,

    /// Issued at timestamp (seconds since Unix epoch)
    pub iat: i64,

    /// Expiration timestamp (seconds since Unix epoch)
    pub exp: i64,
}

/**
 * Authentication-specific error types.
 *
 * Every verification failure is an "unauthorized" condition for callers;
 * only signing can fail for internal reasons.
 */
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Returned when a JWT token has passed its expiration time
    #[error("Token expired")]
    TokenExpired,

    /// Returned when a JWT token is malformed, tampered with or signed with another key
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Returned when the token could not be encoded
    #[error("Failed to sign token: {0}")]
    SigningFailed(String),
}

impl AuthError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, AuthError::TokenExpired | AuthError::InvalidToken(_))
    }
}

impl From<AuthError> for DomainError {
    fn from(err: AuthError) -> Self {
        if err.is_unauthorized() {
            DomainError::unauthorized("Auth", err.to_string())
        } else {
            DomainError::internal_error("Auth", err.to_string())
        }
    }
}

/// Convierte `<entero><unidad>` (unidades s, m, h, d) en segundos.
///
/// Cualquier expresión que no encaje, o que desborde, vale 7 días.
pub fn parse_expiry(expires_in: &str) -> i64 {
    parse_duration_secs(expires_in).unwrap_or(DEFAULT_EXPIRY_SECS)
}

fn parse_duration_secs(expires_in: &str) -> Option<i64> {
    let unit = expires_in.chars().last()?;
    let digits = &expires_in[..expires_in.len() - unit.len_utf8()];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let multiplier = match unit {
        's' => 1,
        'm' => 60,
        'h' => 60 * 60,
        'd' => 60 * 60 * 24,
        _ => return None,
    };

    digits.parse::<i64>().ok()?.checked_mul(multiplier)
}

/**
 * Token service issuing and verifying HS256 signed claims.
 *
 * Stateless: there is no revocation list, so "logout" is the client
 * discarding its token.
 */
pub struct TokenService {
    /// Secret key used for signing JWT tokens
    secret: String,

    /// Expiración por defecto, p. ej. "7d"
    default_expiry: String,
}

impl TokenService {
    pub fn new(secret: impl Into<String>, default_expiry: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            default_expiry: default_expiry.into(),
        }
    }

    pub fn default_expiry(&self) -> &str {
        &self.default_expiry
    }

    /// Firma un token con la expiración configurada por defecto
    pub fn sign_with_default_expiry(&self, subject: &str, email: &str) -> Result<String, AuthError> {
        self.sign(subject, email, &self.default_expiry)
    }

    pub fn sign(&self, subject: &str, email: &str, expires_in: &str) -> Result<String, AuthError> {
        self.sign_at(subject, email, expires_in, Utc::now())
    }

    /// Firma un token tomando `issued_at` como instante de emisión
    pub fn sign_at(
        &self,
        subject: &str,
        email: &str,
        expires_in: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<String, AuthError> {
        let iat = issued_at.timestamp();
        let claims = TokenClaims {
            sub: subject.to_string(),
            email: email.to_string(),
            iat,
            exp: iat.saturating_add(parse_expiry(expires_in)),
        };

        tracing::debug!("JWT claims: sub={}, iat={}, exp={}", claims.sub, claims.iat, claims.exp);

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| {
            tracing::error!("Error generating token: {}", e);
            AuthError::SigningFailed(e.to_string())
        })
    }

    pub fn verify(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        let token_data = decode::<TokenClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            _ => AuthError::InvalidToken(e.to_string()),
        })?;

        Ok(token_data.claims)
    }
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("secret", &"<redacted>")
            .field("default_expiry", &self.default_expiry)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn service() -> TokenService {
        TokenService::new("test-secret", "7d")
    }

    #[test]
    fn round_trip_preserves_subject_and_email() {
        let service = service();
        let token = service.sign("42", "alice@example.com", "1h").unwrap();

        let claims = service.verify(&token).unwrap();
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn default_expiry_is_taken_from_configuration() {
        let service = TokenService::new("test-secret", "15m");
        let token = service.sign_with_default_expiry("1", "a@b.co").unwrap();
        let claims = service.verify(&token).unwrap();
        assert_eq!(claims.exp - claims.iat, 900);
    }

    #[test]
    fn unparsable_duration_falls_back_to_seven_days() {
        let service = service();
        let token = service.sign("1", "a@b.co", "soon").unwrap();
        let claims = service.verify(&token).unwrap();
        assert_eq!(claims.exp - claims.iat, DEFAULT_EXPIRY_SECS);
    }

    #[test]
    fn expired_token_is_rejected() {
        let service = service();
        let issued_at = Utc::now() - Duration::hours(2);
        let token = service.sign_at("1", "a@b.co", "1h", issued_at).unwrap();

        let err = service.verify(&token).unwrap_err();
        assert!(matches!(err, AuthError::TokenExpired));
        assert!(err.is_unauthorized());
    }

    #[test]
    fn token_signed_with_another_secret_is_rejected() {
        let token = TokenService::new("other-secret", "7d")
            .sign("1", "a@b.co", "1h")
            .unwrap();

        let err = service().verify(&token).unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken(_)));
    }

    #[test]
    fn tampered_payload_is_rejected() {
        let service = service();
        let genuine = service.sign("1", "alice@example.com", "1h").unwrap();
        let forged = service.sign("2", "mallory@example.com", "1h").unwrap();

        // Cabecera y firma del token legítimo con el payload de otro
        let genuine_parts: Vec<&str> = genuine.split('.').collect();
        let forged_parts: Vec<&str> = forged.split('.').collect();
        let spliced = format!("{}.{}.{}", genuine_parts[0], forged_parts[1], genuine_parts[2]);

        assert!(matches!(service.verify(&spliced), Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn malformed_token_is_rejected() {
        assert!(service().verify("not-a-token").unwrap_err().is_unauthorized());
    }

    #[test]
    fn unauthorized_errors_map_to_unauthorized_kind() {
        let err: DomainError = AuthError::TokenExpired.into();
        assert_eq!(err.kind, crate::common::errors::ErrorKind::Unauthorized);
    }

    #[test]
    fn parses_each_unit() {
        assert_eq!(parse_expiry("30s"), 30);
        assert_eq!(parse_expiry("15m"), 15 * 60);
        assert_eq!(parse_expiry("2h"), 2 * 60 * 60);
        assert_eq!(parse_expiry("3d"), 3 * 60 * 60 * 24);
        assert_eq!(parse_expiry("0s"), 0);
    }

    #[test]
    fn rejects_malformed_durations() {
        for raw in ["", "7", "d", "10w", "-5s", "1.5h", " 1h", "1h ", "99999999999999999999d"] {
            assert_eq!(parse_expiry(raw), DEFAULT_EXPIRY_SECS, "{raw:?}");
        }
    }

    #[test]
    fn debug_output_hides_secret() {
        let rendered = format!("{:?}", service());
        assert!(!rendered.contains("test-secret"));
    }
}
