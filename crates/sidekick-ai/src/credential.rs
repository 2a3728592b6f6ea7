//! Opaque API credential.

use std::fmt;

/// A secret supplied by the user. Never validated locally and never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wraps a secret. Returns `None` for an empty string.
    pub fn new(secret: impl Into<String>) -> Option<Self> {
        let secret = secret.into();
        if secret.is_empty() {
            None
        } else {
            Some(Self(secret))
        }
    }

    /// The raw secret, for building auth headers.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_secret_is_rejected() {
        assert!(Credential::new("").is_none());
    }

    #[test]
    fn secret_is_not_trimmed() {
        let cred = Credential::new(" sk-test ").unwrap();
        assert_eq!(cred.expose(), " sk-test ");
    }

    #[test]
    fn debug_is_redacted() {
        let cred = Credential::new("sk-very-secret").unwrap();
        let debug = format!("{cred:?}");
        assert!(!debug.contains("sk-very-secret"));
        assert!(debug.contains("REDACTED"));
    }
}
