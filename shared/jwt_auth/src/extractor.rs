use crate::{dto::Claims, error::IdentityError, Role, User};
use axum::http::HeaderValue;
use base64::{prelude::BASE64_URL_SAFE_NO_PAD, Engine};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde_json::{Map, Value};
use std::sync::Arc;

const BEARER_PREFIX: &str = "Bearer ";

///
/// How the signature of a bearer token is treated.
///
#[derive(Clone)]
pub enum TokenVerification {
    /// Signature is never checked and the claims are trusted as they are.
    /// Any `alg` in the header is accepted, `none` included.
    Unverified,

    /// Signature must match the key using one of the algorithms.
    /// Algorithms must belong to the same family as the key.
    Verified {
        key: DecodingKey,
        algorithms: Vec<Algorithm>,
    },
}

///
/// Parses `Authorization: Bearer <token>` into [User].
///
/// No registered claim (`exp`, `aud`, ...) is required.
/// `exp` is still honoured in [TokenVerification::Verified] mode when present.
///
#[derive(Clone)]
pub struct IdentityExtractor {
    inner: Arc<ClaimsDecoder>,
}

enum ClaimsDecoder {
    Unverified,
    Verified {
        key: DecodingKey,
        validation: Validation,
    },
}

impl IdentityExtractor {
    pub fn new(verification: TokenVerification) -> Self {
        let decoder = match verification {
            TokenVerification::Unverified => ClaimsDecoder::Unverified,
            TokenVerification::Verified { key, algorithms } => {
                let mut validation = Validation::default();
                validation.required_spec_claims.clear();
                validation.validate_aud = false;
                validation.algorithms = algorithms;

                ClaimsDecoder::Verified { key, validation }
            }
        };

        Self {
            inner: Arc::new(decoder),
        }
    }

    ///
    /// ### Errors
    /// - [IdentityError::NoCredential] when header is missing
    /// - [IdentityError::MalformedCredential] when
    ///     - header contains illegal characters
    ///     - authorization type is not `Bearer`
    ///     - token is empty
    /// - [IdentityError::InvalidCredential] when
    ///     - token can't be decoded
    ///     - token has no email claim
    ///
    pub fn extract(&self, authorization_header: Option<&HeaderValue>) -> Result<User, IdentityError> {
        let authorization_header = authorization_header.ok_or(IdentityError::NoCredential)?;
        let authorization_value = authorization_header.to_str().map_err(|_| {
            IdentityError::MalformedCredential("illegal character in authorization header")
        })?;

        self.extract_from_value(authorization_value)
    }

    pub fn extract_from_value(&self, authorization_value: &str) -> Result<User, IdentityError> {
        let token = authorization_value
            .strip_prefix(BEARER_PREFIX)
            .ok_or(IdentityError::MalformedCredential(
                "unsupported authorization type",
            ))?
            .trim();
        if token.is_empty() {
            return Err(IdentityError::MalformedCredential("empty token"));
        }

        let claims = match self.inner.as_ref() {
            ClaimsDecoder::Unverified => decode_unverified(token)?,
            ClaimsDecoder::Verified { key, validation } => {
                jsonwebtoken::decode::<Claims>(token, key, validation)
                    .map_err(|err| IdentityError::InvalidCredential(err.to_string()))?
                    .claims
            }
        };

        let email = claims
            .email
            .filter(|email| !email.is_empty())
            .ok_or_else(|| IdentityError::InvalidCredential("missing email claim".to_string()))?;
        let role = claims
            .role
            .as_deref()
            .map(Role::from_claim)
            .unwrap_or_default();

        tracing::trace!(%email, role = role.as_ref(), "extracted identity");

        Ok(User::new(
            email,
            claims.first_name.unwrap_or_default(),
            claims.last_name.unwrap_or_default(),
            role,
        ))
    }
}

///
/// Reads claims of `header.payload.signature` without looking at the signature.
/// Header only has to be a JSON object, its `alg` is not interpreted.
///
fn decode_unverified(token: &str) -> Result<Claims, IdentityError> {
    let mut segments = token.split('.');
    let (Some(header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(IdentityError::InvalidCredential(
            "token must consist of three segments".to_string(),
        ));
    };

    let header = decode_segment(header)?;
    serde_json::from_slice::<Map<String, Value>>(&header)
        .map_err(|err| IdentityError::InvalidCredential(format!("invalid token header: {err}")))?;

    let payload = decode_segment(payload)?;
    serde_json::from_slice::<Claims>(&payload)
        .map_err(|err| IdentityError::InvalidCredential(format!("invalid token payload: {err}")))
}

fn decode_segment(segment: &str) -> Result<Vec<u8>, IdentityError> {
    BASE64_URL_SAFE_NO_PAD
        .decode(segment.trim_end_matches('='))
        .map_err(|err| IdentityError::InvalidCredential(format!("invalid token encoding: {err}")))
}
