//! Newsletter subscription model and address validation.

use super::error::{InkpaneError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Message shown when an address is rejected.
pub const INVALID_EMAIL: &str = "Invalid email address";

/// Current newsletter subscription status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    /// Address the subscription belongs to.
    pub email: String,

    /// Whether the address currently receives the newsletter.
    pub subscribed: bool,

    /// When the API confirmed the subscription.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscribed_at: Option<DateTime<Utc>>,
}

impl Subscription {
    /// An active subscription for `email`, stamped with the current time.
    #[must_use]
    pub fn active(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            subscribed: true,
            subscribed_at: Some(Utc::now()),
        }
    }

    /// An inactive record for `email`.
    #[must_use]
    pub fn inactive(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            subscribed: false,
            subscribed_at: None,
        }
    }
}

/// Checks that `email` looks like an address.
///
/// The only requirement is a `@` somewhere in the trimmed input; anything else,
/// including the empty string, is a validation error.
///
/// # Errors
///
/// Returns [`InkpaneError::Validation`] when the address is rejected.
///
/// # Example
///
/// ```
/// use inkpane::domain::validate_email;
///
/// assert!(validate_email("a@b.com").is_ok());
/// assert!(validate_email("not-an-email").is_err());
/// assert!(validate_email("").is_err());
/// ```
pub fn validate_email(email: &str) -> Result<()> {
    if email.trim().contains('@') {
        Ok(())
    } else {
        Err(InkpaneError::Validation(INVALID_EMAIL.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_subscription_has_timestamp() {
        let sub = Subscription::active("a@b.com");
        assert!(sub.subscribed);
        assert!(sub.subscribed_at.is_some());
    }

    #[test]
    fn whitespace_only_is_rejected() {
        let err = validate_email("   ").unwrap_err();
        assert_eq!(err.to_string(), INVALID_EMAIL);
    }

    #[test]
    fn inactive_subscription_omits_timestamp_in_json() {
        let json = serde_json::to_string(&Subscription::inactive("a@b.com")).unwrap();
        assert!(!json.contains("subscribed_at"));
    }
}
