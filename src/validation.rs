//! Input validation for emails and launch IDs.

use crate::error::{LaunchpadError, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Maximum allowed length for an email address.
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Maximum allowed length for a launch ID.
pub const MAX_LAUNCH_ID_LENGTH: usize = 64;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

/// Validates an email address used for login.
pub fn validate_email(email: &str) -> Result<()> {
    if email.is_empty() {
        return Err(LaunchpadError::Validation(
            "Email cannot be empty".to_string(),
        ));
    }
    if email.len() > MAX_EMAIL_LENGTH {
        return Err(LaunchpadError::Validation(format!(
            "Email exceeds maximum length of {} characters",
            MAX_EMAIL_LENGTH
        )));
    }
    if !EMAIL_RE.is_match(email) {
        return Err(LaunchpadError::Validation(format!(
            "Invalid email address: {}",
            email
        )));
    }
    Ok(())
}

/// Validates a launch ID.
pub fn validate_launch_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(LaunchpadError::Validation(
            "Launch ID cannot be empty".to_string(),
        ));
    }
    if id.len() > MAX_LAUNCH_ID_LENGTH {
        return Err(LaunchpadError::Validation(format!(
            "Launch ID exceeds maximum length of {} characters",
            MAX_LAUNCH_ID_LENGTH
        )));
    }
    if let Some(c) = id
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return Err(LaunchpadError::Validation(format!(
            "Launch ID cannot contain '{}'",
            c
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email_empty() {
        assert!(validate_email("").is_err());
    }

    #[test]
    fn test_validate_email_valid() {
        assert!(validate_email("daisy@apollographql.com").is_ok());
        assert!(validate_email("first.last+tag@sub.example.org").is_ok());
    }

    #[test]
    fn test_validate_email_malformed() {
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("a@b").is_err());
        assert!(validate_email("a b@c.de").is_err());
    }

    #[test]
    fn test_validate_email_too_long() {
        let long = format!("{}@example.com", "a".repeat(MAX_EMAIL_LENGTH));
        assert!(validate_email(&long).is_err());
    }

    #[test]
    fn test_validate_launch_id() {
        assert!(validate_launch_id("109").is_ok());
        assert!(validate_launch_id("crs-20").is_ok());
        assert!(validate_launch_id("").is_err());
        assert!(validate_launch_id("../etc").is_err());
        assert!(validate_launch_id(&"1".repeat(MAX_LAUNCH_ID_LENGTH + 1)).is_err());
    }
}
