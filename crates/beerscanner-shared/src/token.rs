//! The bearer token issued by the backend at the end of the OAuth flow and the
//! claims it carries

use beerscanner_time::Timestamp;
use secrecy::{ExposeSecret, SecretString};

use crate::model::PartialUser;

/// The bearer token, kept secret so it does not end up in logs
#[derive(Debug, Clone)]
pub struct AuthToken(SecretString);

impl AuthToken {
    pub fn new<S: Into<String>>(value: S) -> Self {
        Self(SecretString::from(value.into()))
    }
}

impl ExposeSecret<str> for AuthToken {
    fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }
}

impl From<String> for AuthToken {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl PartialEq for AuthToken {
    fn eq(&self, other: &Self) -> bool {
        self.expose_secret() == other.expose_secret()
    }
}

impl Eq for AuthToken {}

/// Claims the backend puts in the token payload.
///
/// These are read WITHOUT verifying the signature, they are only good enough to
/// show who is (probably) logged in until the server confirms it.
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    /// Subject, the Google id of the user
    pub sub: String,
    pub email: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<Timestamp>,
    pub exp: Timestamp,
}

impl TokenClaims {
    /// A token is only valid while `now` is strictly before the expiry
    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        self.exp.has_passed_at(now)
    }
}

impl From<TokenClaims> for PartialUser {
    fn from(value: TokenClaims) -> Self {
        Self {
            email: value.email,
            name: value.name,
            google_id: value.sub,
            profile_picture: value.picture,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(exp: u64) -> TokenClaims {
        TokenClaims {
            sub: "u1".into(),
            email: "a@b.com".into(),
            name: "A".into(),
            picture: None,
            iat: None,
            exp: Timestamp::from_secs(exp),
        }
    }

    #[test]
    fn expired_at_exactly_exp() {
        let now = Timestamp::from_secs(100);
        assert!(claims(100).is_expired_at(now));
        assert!(claims(99).is_expired_at(now));
        assert!(!claims(101).is_expired_at(now));
    }

    #[test]
    fn partial_user_matches_claims() {
        // Arrange
        let mut claims = claims(100);
        claims.picture = Some("https://example.com/a.png".into());

        // Act
        let actual = PartialUser::from(claims);

        // Assert
        assert_eq!(
            actual,
            PartialUser {
                email: "a@b.com".into(),
                name: "A".into(),
                google_id: "u1".into(),
                profile_picture: Some("https://example.com/a.png".into()),
            }
        );
    }

    #[test]
    fn debug_does_not_leak_token() {
        let token = AuthToken::new("super.secret.value");
        assert!(!format!("{token:?}").contains("super.secret.value"));
        assert_eq!(token.expose_secret(), "super.secret.value");
    }
}
