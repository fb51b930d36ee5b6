//! Login tokens and per-request sessions.
//!
//! A token is the base64 encoding of the user's email. Clients send it back
//! in the `Authorization` header, optionally prefixed with `Bearer `.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::{LaunchpadError, Result};
use crate::model::User;
use crate::store::UserStore;
use crate::validation;

/// The caller of a single GraphQL request.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub user: Option<User>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn email(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.email.as_str())
    }

    /// Resolve an `Authorization` header value into a session.
    ///
    /// Anything that does not name a known user yields an anonymous session.
    pub async fn from_authorization(header: Option<&str>, users: &UserStore) -> Self {
        let Some(raw) = header.map(str::trim).filter(|h| !h.is_empty()) else {
            return Self::anonymous();
        };
        let token = raw.strip_prefix("Bearer ").unwrap_or(raw).trim();

        match email_from_token(token) {
            Ok(email) => {
                let user = users.find_by_email(&email).await;
                if user.is_none() {
                    tracing::warn!(
                        email = %email,
                        "Token names an unknown user; continuing anonymously"
                    );
                }
                Self { user }
            }
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring malformed token");
                Self::anonymous()
            }
        }
    }
}

pub fn issue_token(email: &str) -> String {
    STANDARD.encode(email)
}

pub fn email_from_token(token: &str) -> Result<String> {
    let bytes = STANDARD
        .decode(token)
        .map_err(|e| LaunchpadError::Validation(format!("Malformed token: {}", e)))?;
    let email = String::from_utf8(bytes)
        .map_err(|_| LaunchpadError::Validation("Token is not valid UTF-8".to_string()))?;
    validation::validate_email(&email)?;
    Ok(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_roundtrip() {
        let token = issue_token("daisy@example.com");
        assert_eq!(token, "ZGFpc3lAZXhhbXBsZS5jb20=");
        assert_eq!(email_from_token(&token).unwrap(), "daisy@example.com");
    }

    #[test]
    fn test_token_must_hold_an_email() {
        assert!(email_from_token("not base64!").is_err());
        assert!(email_from_token(&issue_token("just-a-name")).is_err());
    }

    #[tokio::test]
    async fn test_session_from_header() {
        let users = UserStore::in_memory();
        users.find_or_create("daisy@example.com").await.unwrap();
        let token = issue_token("daisy@example.com");

        let session = Session::from_authorization(Some(&token), &users).await;
        assert_eq!(session.email(), Some("daisy@example.com"));

        let bearer = format!("Bearer {}", token);
        let session = Session::from_authorization(Some(&bearer), &users).await;
        assert!(session.user.is_some());
    }

    #[tokio::test]
    async fn test_session_falls_back_to_anonymous() {
        let users = UserStore::in_memory();
        assert!(Session::from_authorization(None, &users).await.user.is_none());
        assert!(Session::from_authorization(Some(""), &users).await.user.is_none());
        assert!(Session::from_authorization(Some("garbage"), &users).await.user.is_none());

        // well-formed token for a user that never logged in
        let token = issue_token("ghost@example.com");
        assert!(Session::from_authorization(Some(&token), &users).await.user.is_none());
    }
}
