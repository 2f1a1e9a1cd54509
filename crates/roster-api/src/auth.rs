//! Authentication: HS256 bearer tokens.
//!
//! [`TokenIssuer`] mints a short-lived JWT once a credential pair has matched;
//! [`TokenValidator`] checks the `Authorization` header on every protected
//! request. Both are built from the same [`SigningSecret`] and carry no other
//! state, so they are cloned freely into handlers.
//!
//! Expiry is checked here rather than by `jsonwebtoken`: a token is already
//! invalid at the instant named by its `exp` claim, with no leeway.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use roster_common::{config::AuthConfig, error::RosterError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The only algorithm tokens are signed or accepted with.
pub const TOKEN_ALGORITHM: Algorithm = Algorithm::HS256;

/// Exact, case-sensitive prefix required on the `Authorization` header.
pub const BEARER_PREFIX: &str = "Bearer ";

/// JWT claims embedded in every issued token.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,
    /// Unique token id, fresh per issuance
    #[serde(default)]
    pub jti: String,
    /// Issued at
    #[serde(default)]
    pub iat: i64,
    /// Expiration
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
}

/// Why a presented token was refused.
///
/// Clients only ever see two messages (see the `From` impl below); the
/// finer kinds exist for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("authorization header missing or not a bearer token")]
    MissingOrMalformedToken,
    #[error("signature does not verify")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
    #[error("token is not a well-formed JWT")]
    Malformed,
}

impl From<TokenError> for RosterError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::MissingOrMalformedToken => RosterError::MissingToken,
            TokenError::InvalidSignature | TokenError::Expired | TokenError::Malformed => {
                RosterError::InvalidToken
            }
        }
    }
}

/// Startup-time auth configuration problems. Fatal: the server must not start.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthConfigError {
    #[error("auth.jwt_secret is missing or empty")]
    EmptySecret,
    #[error("auth.token_ttl_secs must be a positive number of seconds, got {0}")]
    InvalidTtl(u64),
}

/// Token could not be minted.
#[derive(Debug, thiserror::Error)]
pub enum IssueError {
    #[error("token expiry is out of the representable time range")]
    ExpiryOutOfRange,
    #[error(transparent)]
    Signing(#[from] jsonwebtoken::errors::Error),
}

/// Symmetric key shared by issuer and validator.
#[derive(Clone)]
pub struct SigningSecret(Arc<[u8]>);

impl SigningSecret {
    pub fn new(raw: &str) -> Result<Self, AuthConfigError> {
        if raw.trim().is_empty() {
            return Err(AuthConfigError::EmptySecret);
        }
        Ok(Self(Arc::from(raw.as_bytes())))
    }

    fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningSecret(<redacted>)")
    }
}

/// Build the issuer/validator pair from configuration.
pub fn from_config(
    config: &AuthConfig,
) -> Result<(TokenIssuer, TokenValidator), AuthConfigError> {
    let secret = SigningSecret::new(&config.jwt_secret)?;
    let ttl = ttl_from_secs(config.token_ttl_secs)?;
    let issuer = TokenIssuer::new(&secret, ttl)
        .with_issuer(config.issuer.clone())
        .with_audience(config.audience.clone());
    Ok((issuer, TokenValidator::new(&secret)))
}

fn ttl_from_secs(secs: u64) -> Result<Duration, AuthConfigError> {
    i64::try_from(secs)
        .ok()
        .filter(|&s| s > 0)
        .and_then(Duration::try_seconds)
        .ok_or(AuthConfigError::InvalidTtl(secs))
}

/// Mints signed tokens for already-verified usernames.
#[derive(Clone)]
pub struct TokenIssuer {
    key: EncodingKey,
    ttl: Duration,
    issuer: Option<String>,
    audience: Option<String>,
}

impl TokenIssuer {
    pub fn new(secret: &SigningSecret, ttl: Duration) -> Self {
        Self {
            key: EncodingKey::from_secret(secret.as_bytes()),
            ttl,
            issuer: None,
            audience: None,
        }
    }

    pub fn with_issuer(mut self, issuer: Option<String>) -> Self {
        self.issuer = issuer;
        self
    }

    pub fn with_audience(mut self, audience: Option<String>) -> Self {
        self.audience = audience;
        self
    }

    /// Token lifetime.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Generate a token for `username`, valid from now until now + ttl.
    pub fn issue(&self, username: &str) -> Result<String, IssueError> {
        self.issue_at(username, Utc::now())
    }

    /// Generate a token as if the current time were `now`.
    pub fn issue_at(
        &self,
        username: &str,
        now: DateTime<Utc>,
    ) -> Result<String, IssueError> {
        let exp = now
            .checked_add_signed(self.ttl)
            .ok_or(IssueError::ExpiryOutOfRange)?;
        let claims = Claims {
            sub: username.to_string(),
            jti: Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
        };

        Ok(encode(&Header::new(TOKEN_ALGORITHM), &claims, &self.key)?)
    }
}

/// Checks bearer headers against the shared secret and the clock.
#[derive(Clone)]
pub struct TokenValidator {
    key: DecodingKey,
    validation: Validation,
}

impl TokenValidator {
    pub fn new(secret: &SigningSecret) -> Self {
        let mut validation = Validation::new(TOKEN_ALGORITHM);
        validation.leeway = 0;
        // Compared against the caller's clock in `validate_at`
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Validate a raw `Authorization` header value.
    pub fn validate(&self, header: Option<&str>) -> Result<Claims, TokenError> {
        self.validate_at(header, Utc::now())
    }

    /// Validate a raw `Authorization` header value as if the current time were `now`.
    pub fn validate_at(
        &self,
        header: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<Claims, TokenError> {
        let token = extract_bearer(header)?;
        let claims = self.verify(token)?;

        if now.timestamp() >= claims.exp {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }

    /// Check structure and signature of a compact token, without looking at the clock.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| classify(&e))
    }
}

/// Strip the `Bearer ` prefix and surrounding whitespace.
pub fn extract_bearer(header: Option<&str>) -> Result<&str, TokenError> {
    let token = header
        .and_then(|h| h.strip_prefix(BEARER_PREFIX))
        .map(str::trim)
        .ok_or(TokenError::MissingOrMalformedToken)?;

    if token.is_empty() {
        return Err(TokenError::MissingOrMalformedToken);
    }
    Ok(token)
}

/// Map a decode failure to the kind reported in logs.
///
/// Anything that breaks the three-segment shape or the base64/JSON encoding is
/// `Malformed`, even when the damaged byte sits in the signature segment. Only a
/// well-formed token whose signature does not match is `InvalidSignature`.
fn classify(err: &jsonwebtoken::errors::Error) -> TokenError {
    match err.kind() {
        // A foreign `alg` in the header means the signature can't be ours.
        ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => TokenError::InvalidSignature,
        ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::Malformed,
    }
}
