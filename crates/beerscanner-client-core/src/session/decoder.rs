use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use beerscanner_shared::{model::PartialUser, token::TokenClaims};
use beerscanner_time::Timestamp;
use secrecy::ExposeSecret as _;
use thiserror::Error;
use tracing::{debug, info};

use super::TokenStore;

/// Why a token could not be read. All of these simply mean "not signed in"
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("expected 3 dot separated parts but found {0}")]
    Format(usize),
    #[error("payload is not valid base64url")]
    Base64(#[from] base64::DecodeError),
    #[error("payload does not contain the expected claims")]
    Claims(#[from] serde_json::Error),
}

/// Reads the claims of a JWT.
///
/// WARNING: The signature is NOT checked, only the server can do that. Use the
/// result to decide what to show, never to decide what is allowed.
pub fn decode_claims(token: &str) -> Result<TokenClaims, DecodeError> {
    let parts: Vec<&str> = token.split('.').collect();
    let [_header, payload, _signature] = parts.as_slice() else {
        return Err(DecodeError::Format(parts.len()));
    };
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Answers questions about the stored token without using the network
#[derive(Debug, Clone)]
pub struct SessionDecoder {
    tokens: TokenStore,
}

impl SessionDecoder {
    pub fn new(tokens: TokenStore) -> Self {
        Self { tokens }
    }

    /// Re-evaluated on every call, nothing is cached
    pub fn is_valid(&self) -> bool {
        self.is_valid_at(Timestamp::now())
    }

    /// Only valid while `now` is strictly before the expiry. An expired token is
    /// removed from storage, a malformed one is left alone.
    #[tracing::instrument(skip(self))]
    pub fn is_valid_at(&self, now: Timestamp) -> bool {
        let Some(claims) = self.claims() else {
            return false;
        };
        if claims.is_expired_at(now) {
            info!(exp = %claims.exp, "token expired, removing it");
            self.tokens.remove();
            return false;
        }
        true
    }

    /// Does not check expiry, call [`Self::is_valid`] first
    pub fn current_partial_user(&self) -> Option<PartialUser> {
        self.claims().map(PartialUser::from)
    }

    fn claims(&self) -> Option<TokenClaims> {
        let token = self.tokens.get()?;
        match decode_claims(token.expose_secret()) {
            Ok(claims) => Some(claims),
            Err(e) => {
                debug!(?e, "stored token could not be decoded");
                None
            }
        }
    }
}
